mod avatar;
mod ids;
mod user;

pub use avatar::{Avatar, AvatarKind};
pub use ids::UserId;
pub use user::UserRecord;
