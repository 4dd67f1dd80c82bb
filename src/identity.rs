use nix::unistd::{Gid, Group, Uid, User};

/// Resolves numeric owner ids to names.
///
/// The walker holds one of these as `Box<dyn IdentityLookup>` and consults it
/// once per emitted line. A `None` from either method is not an error — the
/// formatter falls back to printing the raw numeric id.
///
/// The production implementation is [`SystemIdentity`]. Tests substitute a
/// fixed table so rendered owner fields don't depend on the host's user
/// database.
pub trait IdentityLookup {
    /// The user name for `uid`, if the user database knows it.
    fn user_name(&self, uid: u32) -> Option<String>;

    /// The group name for `gid`, if the group database knows it.
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Identity lookup backed by the host's user and group databases.
///
/// Stateless — every call queries the database. Callers that list very large
/// trees could wrap this in a memoizing adapter behind the same trait.
pub struct SystemIdentity;

impl IdentityLookup for SystemIdentity {
    fn user_name(&self, uid: u32) -> Option<String> {
        User::from_uid(Uid::from_raw(uid))
            .ok()
            .flatten()
            .map(|user| user.name)
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        Group::from_gid(Gid::from_raw(gid))
            .ok()
            .flatten()
            .map(|group| group.name)
    }
}
