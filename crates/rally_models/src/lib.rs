pub mod collective;
pub mod error;
pub mod member;
pub mod order;
pub mod subscription;
pub mod tier;
pub mod user;

pub use collective::{ CollectiveModel, CollectiveType, ContributorCollective, HostModel };
pub use error::{ Error, Result };
pub use member::{ DisplayMode, MemberModel, MemberStats };
pub use order::{ OrderCollective, OrderModel, OrderSummary, PaymentMethodModel };
pub use subscription::SubscriptionModel;
pub use tier::{ Interval, TierModel, TierStats };
pub use user::UserModel;
