pub use super::community::Entity as Community;
pub use super::community_application::Entity as CommunityApplication;
pub use super::mission::Entity as Mission;
pub use super::mission_access::Entity as MissionAccess;
pub use super::mission_slot::Entity as MissionSlot;
pub use super::mission_slot_group::Entity as MissionSlotGroup;
pub use super::mission_slot_registration::Entity as MissionSlotRegistration;
pub use super::mission_slot_template::Entity as MissionSlotTemplate;
pub use super::notification::Entity as Notification;
pub use super::permission::Entity as Permission;
pub use super::user::Entity as User;
