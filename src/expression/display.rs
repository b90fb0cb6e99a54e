use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Binary(op, l, r) => {
                    let need_l = matches!(
                        l.as_ref(),
                        Expression::Binary(lo, _, _) if lo.needs_parens_left_of(*op)
                    );
                    let need_r = matches!(
                        r.as_ref(),
                        Expression::Binary(ro, _, _) if ro.needs_parens_right_of(*op)
                    );
                    write_with_parens(f, l, need_l)?;
                    write!(f, " {} ", op)?;
                    write_with_parens(f, r, need_r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
