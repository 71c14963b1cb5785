//! User and group name resolution

use std::collections::HashMap;

use nix::unistd::{Gid, Group, Uid, User};

/// Sentinel shown when a group id has no name.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Maps numeric ids to display names, best effort.
pub trait NameResolver {
    fn user_name(&mut self, uid: u32) -> Option<String>;
    fn group_name(&mut self, gid: u32) -> Option<String>;
}

/// Resolver backed by the system user and group databases.
///
/// Lookups are cached for the lifetime of the resolver, since a tree
/// usually has only a handful of distinct owners.
#[derive(Debug, Default)]
pub struct SystemResolver {
    users: HashMap<u32, Option<String>>,
    groups: HashMap<u32, Option<String>>,
}

impl SystemResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NameResolver for SystemResolver {
    fn user_name(&mut self, uid: u32) -> Option<String> {
        self.users
            .entry(uid)
            .or_insert_with(|| match User::from_uid(Uid::from_raw(uid)) {
                Ok(user) => user.map(|u| u.name),
                Err(e) => {
                    tracing::debug!(uid, error = %e, "user lookup failed");
                    None
                }
            })
            .clone()
    }

    fn group_name(&mut self, gid: u32) -> Option<String> {
        self.groups
            .entry(gid)
            .or_insert_with(|| match Group::from_gid(Gid::from_raw(gid)) {
                Ok(group) => group.map(|g| g.name),
                Err(e) => {
                    tracing::debug!(gid, error = %e, "group lookup failed");
                    None
                }
            })
            .clone()
    }
}

/// Owner name, or the numeric uid when it cannot be resolved.
pub fn owner_label<R: NameResolver + ?Sized>(resolver: &mut R, uid: u32) -> String {
    resolver.user_name(uid).unwrap_or_else(|| uid.to_string())
}

/// Group name, or [`UNKNOWN_GROUP`] when it cannot be resolved.
pub fn group_label<R: NameResolver + ?Sized>(resolver: &mut R, gid: u32) -> String {
    resolver
        .group_name(gid)
        .unwrap_or_else(|| UNKNOWN_GROUP.to_string())
}
