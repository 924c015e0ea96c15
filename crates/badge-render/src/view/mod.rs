//! 视图模型
//!
//! 纯函数：输入颁发记录、渲染上下文与协作方，输出页面所需的全部数据。

pub mod collection;
pub mod evidence;
pub mod issued;

pub use collection::{BadgeCard, CollectionPage, build_collection_page};
pub use issued::{IssuedBadgePage, build_issued_page};
