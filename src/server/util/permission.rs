//! Dotted permission strings and the wildcard-aware tree used to evaluate them.
//!
//! Permissions are stored flat (`community.alpha.leader`, `admin.superadmin`,
//! `mission.op-thunder.editor`) and folded into a tree, one node per segment, before
//! a query is walked against it. Matching is case-insensitive.
//!
//! A query is granted when the walk meets a `*` node at any depth, or when every
//! segment of the query is consumed inside the tree. Walking past a leaf fails, so
//! `admin` does not grant `admin.user` while `community.alpha.leader` does grant
//! `community.alpha`.

use std::collections::BTreeMap;

/// Segment that grants everything below the level it appears on.
pub const WILDCARD: &str = "*";

/// Permission granting every other permission.
pub const SUPERADMIN: &str = "admin.superadmin";

/// Nested map of permission segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionTree {
    children: BTreeMap<String, PermissionTree>,
}

impl PermissionTree {
    /// Builds a tree from dotted permission strings.
    ///
    /// Strings are lower-cased and split on `.`; shared prefixes share nodes, so
    /// `["a.b", "a.c"]` yields a single `a` node with children `b` and `c`.
    ///
    /// # Arguments
    /// - `permissions` - Flat permission strings as stored for a user
    ///
    /// # Returns
    /// - `PermissionTree` - Tree with one branch per distinct segment path
    pub fn parse<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = PermissionTree::default();

        for permission in permissions {
            let permission = permission.as_ref().to_lowercase();
            let mut node = &mut root;
            for segment in permission.split('.') {
                node = node.children.entry(segment.to_string()).or_default();
            }
        }

        root
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[cfg(test)]
    fn child(&self, segment: &str) -> Option<&PermissionTree> {
        self.children.get(segment)
    }

    /// Walks a single dotted target against the tree.
    ///
    /// # Arguments
    /// - `target` - Dotted permission to check, e.g. `mission.op-thunder.editor`
    ///
    /// # Returns
    /// - `true` - A wildcard was met along the path or the whole target was consumed
    /// - `false` - The tree is empty or the walk left the tree
    pub fn find(&self, target: &str) -> bool {
        let target = target.to_lowercase();
        let segments: Vec<&str> = target.split('.').collect();

        self.find_segments(&segments)
    }

    fn find_segments(&self, segments: &[&str]) -> bool {
        if self.children.is_empty() {
            return false;
        }

        let Some((head, rest)) = segments.split_first() else {
            return true;
        };

        if self.children.contains_key(WILDCARD) {
            return true;
        }

        match self.children.get(*head) {
            Some(_) if rest.is_empty() => true,
            Some(child) => child.find_segments(rest),
            None => false,
        }
    }

    /// Checks whether any of `targets` is granted.
    ///
    /// A top-level `*` or `admin.superadmin` anywhere in the tree grants every
    /// target, including an empty target list.
    ///
    /// # Arguments
    /// - `targets` - Candidate permissions, any one of which suffices
    ///
    /// # Returns
    /// - `true` - Global bypass present or at least one target matched
    /// - `false` - No target matched
    pub fn has_permission<S: AsRef<str>>(&self, targets: &[S]) -> bool {
        if self.children.contains_key(WILDCARD) || self.find(SUPERADMIN) {
            return true;
        }

        targets.iter().any(|target| self.find(target.as_ref()))
    }
}

/// Checks a flat permission list against candidate targets.
///
/// An empty permission list never grants anything.
///
/// # Arguments
/// - `permissions` - Permission strings held by the caller
/// - `targets` - Candidate permissions, any one of which suffices
///
/// # Returns
/// - `true` - At least one target is granted
/// - `false` - Nothing granted or no permissions held
pub fn has_permission<P, T>(permissions: &[P], targets: &[T]) -> bool
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    if permissions.is_empty() {
        return false;
    }

    PermissionTree::parse(permissions).has_permission(targets)
}

/// Returns `true` if `permission` may be granted through the community endpoints.
///
/// Only `community.{slug}.leader` and `community.{slug}.recruitment` qualify.
pub fn is_valid_community_permission(slug: &str, permission: &str) -> bool {
    let permission = permission.to_lowercase();
    let slug = slug.to_lowercase();

    permission == format!("community.{}.leader", slug)
        || permission == format!("community.{}.recruitment", slug)
}

/// Returns `true` if `permission` may be granted through the mission endpoints.
///
/// Only `mission.{slug}.editor` and `mission.{slug}.slotlist.community` qualify.
pub fn is_valid_mission_permission(slug: &str, permission: &str) -> bool {
    let permission = permission.to_lowercase();
    let slug = slug.to_lowercase();

    permission == format!("mission.{}.editor", slug)
        || permission == format!("mission.{}.slotlist.community", slug)
}
