//! 领域模型定义
//!
//! - `badge`: 徽章定义、条件、背书、相关徽章与对齐项
//! - `issued`: 颁发记录、获得者、用户徽章列表行
//! - `enums`: 作用域、条件类型、聚合方式与背包 API 版本

mod badge;
mod enums;
mod issued;

pub use badge::*;
pub use enums::*;
pub use issued::*;
