//! Building blocks shared by the portal pages.

mod card;
mod error_page;
mod footer;
mod member;
mod pagination;
pub mod password;
pub mod upload;

pub use card::{ArticleCard, EventCard, ForumCard};
pub use error_page::{ErrorMessage, Spinner, StatusPage};
pub use footer::Footer;
pub use member::{DivisionSection, MemberCard};
pub use pagination::Pagination;
pub use password::{PasswordInput, PasswordStrengthMeter};
pub use upload::ImagePicker;
