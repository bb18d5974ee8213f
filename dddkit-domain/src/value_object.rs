//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，构造后不可变，构造时完成自身校验。
//!

use crate::check::Checkable;

/// 值对象抽象
///
/// 关键特征：
///
/// * 无标识；
/// * 不可变（只暴露只读视图，不提供可变方法）；
/// * 能够自我校验（见 [`Checkable`]，构造函数以 `checked()` 收尾）。
pub trait ValueObject: Checkable + Clone + PartialEq {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{Check, CheckOutcome};
    use crate::error::{DomainError, DomainResult};

    #[derive(Debug, Clone, PartialEq)]
    struct Currency(String);

    impl Currency {
        fn new(code: impl Into<String>) -> DomainResult<Self> {
            Self(code.into()).checked()
        }

        fn code_must_be_three_letters(&self) -> CheckOutcome {
            (
                self.0.len() == 3 && self.0.chars().all(|c| c.is_ascii_uppercase()),
                "Currency code must be three uppercase letters",
            )
                .into()
        }
    }

    impl Checkable for Currency {
        fn checks() -> &'static [Check<Self>] {
            const CHECKS: &[Check<Currency>] = &[Check::new(
                "code_must_be_three_letters",
                Currency::code_must_be_three_letters,
            )];
            CHECKS
        }
    }

    impl ValueObject for Currency {}

    #[test]
    fn valid_value_object_constructs() {
        let eur = Currency::new("EUR").unwrap();
        assert_eq!(eur, eur.clone());
    }

    #[test]
    fn invalid_value_object_never_escapes_construction() {
        let err = Currency::new("euro").unwrap_err();
        match err {
            DomainError::CheckFailed { message, .. } => {
                assert_eq!(message, "Currency code must be three uppercase letters");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Currency::new("USD").unwrap(), Currency::new("USD").unwrap());
        assert_ne!(Currency::new("USD").unwrap(), Currency::new("EUR").unwrap());
    }
}
