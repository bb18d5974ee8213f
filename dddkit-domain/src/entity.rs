//! 实体（Entity）
//!
//! 有标识的领域对象：仅能通过其所属聚合修改，不能脱离聚合存在，
//! 也不单独经由仓储保存。与值对象共享构造期校验能力。
//!
use std::{fmt::Display, str::FromStr};

use crate::check::Checkable;

/// 具备唯一标识的实体抽象
pub trait Entity: Checkable + Send + Sync {
    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display + PartialEq;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
