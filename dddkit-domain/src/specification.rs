//! 规约（Specification）
//!
//! 封装可复用、可组合的业务规则。组合子按值组合（无装箱、无分配），
//! 并可经 [`Specification::to_outcome`] 充当一条声明式校验的谓词实现。
//!
use crate::check::CheckOutcome;

/// 规约模式的核心 trait
pub trait Specification<T> {
    /// 检查候选对象是否满足规约
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// 与另一个规约进行 AND 组合
    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And(self, other)
    }

    /// 与另一个规约进行 OR 组合
    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or(self, other)
    }

    /// 对规约进行 NOT 操作
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }

    /// 以校验结果的形式求值，便于在 [`crate::check::Check`] 谓词中复用规约
    fn to_outcome(&self, candidate: &T) -> CheckOutcome {
        self.is_satisfied_by(candidate).into()
    }
}

/// AND 组合：两个规约都满足时成立
pub struct And<L, R>(L, R);

impl<T, L, R> Specification<T> for And<L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) && self.1.is_satisfied_by(candidate)
    }
}

/// OR 组合：任意一个规约满足时成立
pub struct Or<L, R>(L, R);

impl<T, L, R> Specification<T> for Or<L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) || self.1.is_satisfied_by(candidate)
    }
}

/// NOT：内部规约不满足时成立
pub struct Not<S>(S);

impl<T, S> Specification<T> for Not<S>
where
    S: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.0.is_satisfied_by(candidate)
    }
}
