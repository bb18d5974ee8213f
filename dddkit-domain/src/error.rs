//! 领域层统一错误定义
//!
//! 聚焦校验失败、校验契约违规与参数/状态类错误的最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 校验 ---
    /// 校验未通过：数据性错误，携带可读原因
    #[error("{message}")]
    CheckFailed {
        check: &'static str,
        message: String,
    },
    /// 校验谓词违反了返回契约：实现缺陷，调用方不可恢复
    #[error("check '{check}' violated the check contract")]
    CheckContractViolated { check: &'static str },

    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("parse error: {reason}")]
    Parse { reason: String },

    // --- 领域规则/参数与状态 ---
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

// ---- Cross-crate conversions for infrastructure convenience ----
// 允许在调用方直接使用 `?` 将 uuid/数值解析等错误转换为 DomainError

impl From<uuid::Error> for DomainError {
    fn from(err: uuid::Error) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<std::num::ParseIntError> for DomainError {
    fn from(err: std::num::ParseIntError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<std::num::ParseFloatError> for DomainError {
    fn from(err: std::num::ParseFloatError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<chrono::ParseError> for DomainError {
    fn from(err: chrono::ParseError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 校验失败的显示文本就是携带的原因
    #[test]
    fn check_failed_displays_message() {
        let err = DomainError::CheckFailed {
            check: "age_must_be_positive",
            message: "Check failed: age_must_be_positive".to_string(),
        };
        assert_eq!(err.to_string(), "Check failed: age_must_be_positive");
    }

    #[test]
    fn contract_violation_names_the_check() {
        let err = DomainError::CheckContractViolated {
            check: "must_be_error",
        };
        assert_eq!(
            err.to_string(),
            "check 'must_be_error' violated the check contract"
        );
    }

    #[test]
    fn parse_errors_convert_via_question_mark() {
        fn parse(input: &str) -> DomainResult<i64> {
            Ok(input.parse::<i64>()?)
        }

        assert_eq!(parse("42").unwrap(), 42);
        match parse("not a number").unwrap_err() {
            DomainError::Parse { reason } => assert!(!reason.is_empty()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn uuid_errors_convert_to_parse() {
        let err: DomainError = "not-a-uuid".parse::<uuid::Uuid>().unwrap_err().into();
        assert!(matches!(err, DomainError::Parse { .. }));
    }
}
