pub mod blog;
pub mod notice;
pub mod sections;

pub use blog::{BlogContentSection, BlogSection};
pub use notice::NoticeToast;
pub use sections::{AboutSection, BooksSection, GearSection, SectionView};
