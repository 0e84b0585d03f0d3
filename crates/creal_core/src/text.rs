//! Fixed-point rendering and construction dumps.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Signed;

use crate::error::RealError;
use crate::node::{Kind, Real};

impl Real {
    /// Renders the value with exactly `decimals` fractional digits in the
    /// given radix (2..=36, lowercase digits above 9).
    ///
    /// Any evaluation failure (division by zero, a domain error inside the
    /// expression, an exceeded precision limit) is rendered as
    /// `<undefined: …>` instead of propagating.
    pub fn to_fixed(&self, decimals: u32, radix: u32) -> String {
        match self.to_fixed_checked(decimals, radix) {
            Ok(s) => s,
            Err(e) => format!("<undefined: {e}>"),
        }
    }

    fn to_fixed_checked(&self, decimals: u32, radix: u32) -> Result<String, RealError> {
        let scaled = if radix == 16 {
            self.shift_left(4 * i64::from(decimals))
        } else {
            let sf = num_traits::pow(BigInt::from(radix), decimals as usize);
            self * &Real::from(sf)
        };

        let si = scaled.approximate(0)?;
        let mut out = si.magnitude().to_str_radix(radix);

        let dec = decimals as usize;
        if dec > 0 {
            if out.len() <= dec {
                out = format!("{}{}", "0".repeat(dec + 1 - out.len()), out);
            }
            out.insert(out.len() - dec, '.');
        }
        if si.is_negative() {
            out.insert(0, '-');
        }
        Ok(out)
    }

    /// An S-expression-style dump of the expression DAG, e.g.
    /// `Add(Int(2), Int(3))`.
    pub fn as_construction(&self) -> String {
        let mut out = String::new();
        write_construction(&mut out, self);
        out
    }

    /// Like [`as_construction`](Real::as_construction), re-wrapped with one
    /// opening per line: every `(` increases the indentation by one copy of
    /// `indent`, every `)` decreases it, and each argument starts on its
    /// own line. An empty `indent` returns the single-line form.
    pub fn as_construction_indent(&self, indent: &str) -> String {
        let data = self.as_construction();
        if indent.is_empty() {
            return data;
        }

        let mut out = String::new();
        let mut depth = 0usize;
        let mut saw_comma = false;
        for ch in data.chars() {
            match ch {
                '(' => {
                    out.push(ch);
                    depth += 1;
                    out.push('\n');
                    out.push_str(&indent.repeat(depth));
                    saw_comma = false;
                }
                ')' => {
                    depth = depth.saturating_sub(1);
                    out.push(',');
                    out.push('\n');
                    out.push_str(&indent.repeat(depth));
                    out.push(ch);
                    saw_comma = false;
                }
                ',' => {
                    out.push(ch);
                    out.push('\n');
                    out.push_str(&indent.repeat(depth));
                    saw_comma = true;
                }
                ' ' => {
                    // argument separators already put a newline after the comma
                    if !saw_comma {
                        out.push(ch);
                    }
                    saw_comma = false;
                }
                _ => {
                    out.push(ch);
                    saw_comma = false;
                }
            }
        }

        out
    }
}

fn write_construction(out: &mut String, r: &Real) {
    use fmt::Write;

    match r.kind() {
        Kind::Int(i) => {
            let _ = write!(out, "Int({i})");
        }
        Kind::Add(a, b) => binary(out, "Add", a, b),
        Kind::Neg(r) => unary(out, "Negate", r),
        Kind::Mul(a, b) => binary(out, "Multiply", a, b),
        Kind::Inv(r) => unary(out, "Inverse", r),
        Kind::Shift(r, n) => {
            let dir = if *n < 0 { "ShiftRight" } else { "ShiftLeft" };
            out.push_str(dir);
            out.push('(');
            write_construction(out, r);
            let _ = write!(out, ", {})", n.unsigned_abs());
        }
        Kind::CondSign {
            cond,
            on_neg,
            on_pos,
        } => {
            out.push_str("CondSign(");
            write_construction(out, cond);
            out.push_str(", ");
            write_construction(out, on_neg);
            out.push_str(", ");
            write_construction(out, on_pos);
            out.push(')');
        }
        Kind::PrescaledExp(r) => {
            out.push_str("Pow(E, ");
            write_construction(out, r);
            out.push(')');
        }
        Kind::PrescaledLn(r) => unary(out, "Ln", r),
        Kind::PrescaledCos(r) => unary(out, "Cosine", r),
        Kind::IntegralArctan(a) => unary(out, "IntegralArctan", a),
        Kind::PrescaledSqrt(r) => unary(out, "Sqrt", r),
        Kind::Named(name, inner) => {
            let _ = write!(out, "Named({name:?}, ");
            write_construction(out, inner);
            out.push(')');
        }
    }
}

fn unary(out: &mut String, label: &str, r: &Real) {
    out.push_str(label);
    out.push('(');
    write_construction(out, r);
    out.push(')');
}

fn binary(out: &mut String, label: &str, a: &Real, b: &Real) {
    out.push_str(label);
    out.push('(');
    write_construction(out, a);
    out.push_str(", ");
    write_construction(out, b);
    out.push(')');
}

impl fmt::Debug for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_construction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_of_algebra() {
        let sum = &Real::from(2) + &Real::from(3);
        assert_eq!(sum.as_construction(), "Add(Int(2), Int(3))");

        let prod = &Real::from(-4) * &Real::from(5).inverse();
        assert_eq!(prod.as_construction(), "Multiply(Int(-4), Inverse(Int(5)))");

        assert_eq!(
            Real::from(7).shift_right(3).as_construction(),
            "ShiftRight(Int(7), 3)"
        );
        assert_eq!(
            Real::from(7).shift_left(2).as_construction(),
            "ShiftLeft(Int(7), 2)"
        );
        assert_eq!((-&Real::from(9)).as_construction(), "Negate(Int(9))");
    }

    #[test]
    fn construction_of_condsign() {
        let abs = Real::from(-3).abs();
        assert_eq!(
            abs.as_construction(),
            "CondSign(Int(-3), Negate(Int(-3)), Int(-3))"
        );
    }

    #[test]
    fn construction_of_named() {
        let sqrt2 = Real::sqrt2();
        assert_eq!(sqrt2.as_construction(), "Named(\"√2\", Sqrt(Int(2)))");
        assert_eq!(sqrt2.name(), Some("√2"));
        assert_eq!(Real::from(3).name(), None);
    }

    #[test]
    fn indented_construction() {
        let sum = &Real::from(2) + &Real::from(3);
        assert_eq!(
            sum.as_construction_indent("  "),
            "Add(\n  Int(\n    2,\n  ),\n  Int(\n    3,\n  ),\n)"
        );
        assert_eq!(sum.as_construction_indent(""), "Add(Int(2), Int(3))");
    }
}
