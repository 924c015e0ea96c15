//! maud 模板
//!
//! 只做视图模型到 HTML 的转换。协作方提供的条件与背书片段原样嵌入，其余文本一律转义。

pub mod collection;
pub mod issued;

pub use collection::badge_collection;
pub use issued::issued_badge;
