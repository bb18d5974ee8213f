//! 构造期校验（Check）
//!
//! 以静态声明的谓词列表描述记录类型的构造不变量：每个谓词具名、无参、
//! 返回 [`CheckOutcome`]；构造路径上依声明顺序执行，遇到第一个失败
//! 立即返回错误（fail-fast），其余谓词不再求值。
//!
//! # 示例
//!
//! ```
//! use dddkit_domain::check::{Check, CheckOutcome, Checkable};
//! use dddkit_domain::error::DomainResult;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Percentage(f64);
//!
//! impl Percentage {
//!     fn new(value: f64) -> DomainResult<Self> {
//!         Self(value).checked()
//!     }
//!
//!     fn must_be_in_range(&self) -> CheckOutcome {
//!         ((0.0..=100.0).contains(&self.0), "Percentage must be in 0..=100").into()
//!     }
//! }
//!
//! impl Checkable for Percentage {
//!     fn checks() -> &'static [Check<Self>] {
//!         const CHECKS: &[Check<Percentage>] =
//!             &[Check::new("must_be_in_range", Percentage::must_be_in_range)];
//!         CHECKS
//!     }
//! }
//!
//! assert!(Percentage::new(99.5).is_ok());
//! assert_eq!(
//!     Percentage::new(250.0).unwrap_err().to_string(),
//!     "Percentage must be in 0..=100"
//! );
//! ```
use crate::error::{DomainError, DomainResult};

/// 单个谓词的求值结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// 谓词成立
    Pass,
    /// 谓词不成立，可附带说明信息；缺省信息为 `Check failed: <谓词名>`
    Fail(Option<String>),
    /// 谓词自身违反了返回契约
    ///
    /// 用于桥接结果形态无法静态保证的检查来源（例如外部规则引擎的
    /// 动态返回值）；一律映射为 [`DomainError::CheckContractViolated`]，
    /// 与数据性的校验失败严格区分。
    Violation,
}

impl CheckOutcome {
    /// 携带说明信息的失败结果
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(Some(message.into()))
    }
}

impl From<bool> for CheckOutcome {
    fn from(holds: bool) -> Self {
        if holds {
            Self::Pass
        } else {
            Self::Fail(None)
        }
    }
}

impl From<(bool, &str)> for CheckOutcome {
    fn from((holds, message): (bool, &str)) -> Self {
        if holds {
            Self::Pass
        } else {
            Self::Fail(Some(message.to_string()))
        }
    }
}

impl From<(bool, String)> for CheckOutcome {
    fn from((holds, message): (bool, String)) -> Self {
        if holds {
            Self::Pass
        } else {
            Self::Fail(Some(message))
        }
    }
}

/// 一条具名校验
///
/// 在记录类型上静态声明（见 [`Checkable::checks`]），谓词以函数指针表达，
/// 不依赖运行期反射。失败时默认以 [`DomainError::CheckFailed`] 返回；
/// 通过 [`Check::raises`] 可改用调用方指定的错误种类。
pub struct Check<T> {
    name: &'static str,
    predicate: fn(&T) -> CheckOutcome,
    raises: Option<fn(String) -> DomainError>,
}

impl<T> Check<T> {
    pub const fn new(name: &'static str, predicate: fn(&T) -> CheckOutcome) -> Self {
        Self {
            name,
            predicate,
            raises: None,
        }
    }

    /// 失败时以 `build` 构造的错误种类返回，替代默认的 `CheckFailed`
    ///
    /// ```
    /// use dddkit_domain::check::{Check, CheckOutcome};
    /// use dddkit_domain::error::DomainError;
    ///
    /// struct Port(u32);
    ///
    /// const PORT_CHECK: Check<Port> =
    ///     Check::new("port_must_fit", |p: &Port| (p.0 <= 65535).into())
    ///         .raises(|reason| DomainError::InvalidArgument { reason });
    /// # let _ = PORT_CHECK;
    /// ```
    pub const fn raises(mut self, build: fn(String) -> DomainError) -> Self {
        self.raises = Some(build);
        self
    }

    /// 谓词名，用于缺省错误信息与错误定位
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// 对给定值求值该谓词，失败时给出对应错误
    pub fn run(&self, value: &T) -> DomainResult<()> {
        match (self.predicate)(value) {
            CheckOutcome::Pass => Ok(()),
            CheckOutcome::Fail(message) => {
                let message = message.unwrap_or_else(|| format!("Check failed: {}", self.name));
                Err(match self.raises {
                    Some(build) => build(message),
                    None => DomainError::CheckFailed {
                        check: self.name,
                        message,
                    },
                })
            }
            CheckOutcome::Violation => Err(DomainError::CheckContractViolated { check: self.name }),
        }
    }
}

/// 可校验记录：以静态列表声明其全部构造不变量
pub trait Checkable: Sized + 'static {
    /// 该类型声明的校验列表，按声明顺序执行
    ///
    /// 缺省实现为空列表：没有声明任何校验的记录构造恒成功。
    fn checks() -> &'static [Check<Self>] {
        &[]
    }

    /// 依声明顺序执行全部校验，遇到第一个失败立即返回
    fn validate(&self) -> DomainResult<()> {
        for check in Self::checks() {
            check.run(self)?;
        }
        Ok(())
    }

    /// 校验通过后返回自身
    ///
    /// 供构造函数在字段组装完成后调用，保证调用方拿不到无效状态的实例。
    fn checked(self) -> DomainResult<Self> {
        self.validate()?;
        Ok(self)
    }
}
