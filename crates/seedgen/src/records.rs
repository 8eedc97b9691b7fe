use serde::Serialize;
use uuid::Uuid;

/// One line of seed output. Internally tagged so a single NDJSON stream
/// carries every record kind; loaders dispatch on the `record` field.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum Record<'a> {
    Organization(&'a Organization),
    User(&'a User),
    Item(&'a Item),
    SharingLink(&'a SharingLink),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Regular,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u64,
    pub organization_id: u64,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    File,
    Folder,
}

/// A node of a user's storage hierarchy. `parent_id = None` means the item
/// sits at the root of its owner's space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u64,
    pub owner_id: u64,
    pub parent_id: Option<u64>,
    pub name: String,
    pub kind: ItemKind,
    pub file_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Read,
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharingLink {
    pub id: u64,
    pub item_id: u64,
    pub token: Uuid,
    pub permission: Permission,
    /// Unix seconds; None means the link never expires.
    pub expires_at: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_carry_their_tag() {
        let org = Organization {
            id: 1,
            name: "acme".into(),
        };
        let value = serde_json::to_value(Record::Organization(&org)).unwrap();
        assert_eq!(value["record"], "organization");
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "acme");
    }

    #[test]
    fn enums_serialize_snake_case() {
        let item = Item {
            id: 9,
            owner_id: 2,
            parent_id: None,
            name: "0-inbox".into(),
            kind: ItemKind::Folder,
            file_size: 0,
        };
        let value = serde_json::to_value(Record::Item(&item)).unwrap();
        assert_eq!(value["record"], "item");
        assert_eq!(value["kind"], "folder");
        assert!(value["parent_id"].is_null());
    }

    #[test]
    fn sharing_link_round_trips_token() {
        let link = SharingLink {
            id: 4,
            item_id: 9,
            token: Uuid::nil(),
            permission: Permission::Read,
            expires_at: Some(4_070_908_799),
        };
        let value = serde_json::to_value(Record::SharingLink(&link)).unwrap();
        assert_eq!(value["record"], "sharing_link");
        assert_eq!(value["permission"], "read");
        assert_eq!(value["token"], "00000000-0000-0000-0000-000000000000");
    }
}
