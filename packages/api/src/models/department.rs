//! Departments, their divisions and the members of each division.
//!
//! A department only decodes when it carries `id`, `department` and `slug`, so
//! list entries missing any of them are dropped by [`coerce_list`]. Nested
//! `divisions` and `members` fall back to empty lists.
//!
//! [`coerce_list`]: crate::envelope::coerce_list

use serde::{Deserialize, Serialize};

use crate::envelope::lenient_vec;

/// Role tags that mark the head of a division.
const LEAD_ROLES: &[&str] = &["lead", "head"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub division_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub role: String,
}

impl Member {
    pub fn is_lead(&self) -> bool {
        let role = self.role.trim();
        LEAD_ROLES.iter().any(|lead| role.eq_ignore_ascii_case(lead))
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo.as_deref().filter(|url| !url.is_empty())
    }
}

/// Department summary embedded in a division.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentRef {
    pub id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Division {
    pub id: String,
    #[serde(default)]
    pub department_id: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub members: Vec<Member>,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
}

impl Division {
    /// Members with leads first, keeping the API order otherwise.
    pub fn sorted_members(&self) -> Vec<&Member> {
        let (leads, rest): (Vec<&Member>, Vec<&Member>) =
            self.members.iter().partition(|m| m.is_lead());
        leads.into_iter().chain(rest).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: String,
    pub department: String,
    pub slug: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub divisions: Vec<Division>,
}

impl Department {
    /// Divisions that have members, followed by those that do not.
    pub fn grouped_divisions(&self) -> (Vec<&Division>, Vec<&Division>) {
        self.divisions.iter().partition(|d| !d.members.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_lists_default_to_empty() {
        let dept: Department = serde_json::from_value(json!({
            "id": "d1",
            "department": "Riset dan Teknologi",
            "slug": "ristek",
            "divisions": [
                { "id": "v1", "division": "Web", "members": "oops" },
                { "id": "v2", "division": "AI" }
            ]
        }))
        .unwrap();
        assert_eq!(dept.divisions.len(), 2);
        assert!(dept.divisions.iter().all(|d| d.members.is_empty()));

        let no_divisions: Department = serde_json::from_value(json!({
            "id": "d2", "department": "BPH", "slug": "bph", "divisions": { "x": 1 }
        }))
        .unwrap();
        assert!(no_divisions.divisions.is_empty());
    }

    #[test]
    fn test_department_requires_slug() {
        let result: Result<Department, _> =
            serde_json::from_value(json!({ "id": "d1", "department": "BPH" }));
        assert!(result.is_err());
    }

    fn member(id: &str, role: &str) -> Member {
        Member {
            id: id.into(),
            division_id: "v1".into(),
            name: id.into(),
            photo: None,
            position: String::new(),
            role: role.into(),
        }
    }

    #[test]
    fn test_leads_come_first() {
        let division = Division {
            id: "v1".into(),
            department_id: "d1".into(),
            division: "Web".into(),
            slug: "web".into(),
            members: vec![member("a", "member"), member("b", "Head"), member("c", "LEAD")],
            department: None,
        };
        let order: Vec<&str> = division.sorted_members().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(order, ["b", "c", "a"]);
    }

    #[test]
    fn test_grouped_divisions() {
        let filled = Division {
            id: "v1".into(),
            department_id: "d1".into(),
            division: "Web".into(),
            slug: "web".into(),
            members: vec![member("a", "member")],
            department: None,
        };
        let empty = Division {
            id: "v2".into(),
            members: Vec::new(),
            ..filled.clone()
        };
        let dept = Department {
            id: "d1".into(),
            department: "Ristek".into(),
            slug: "ristek".into(),
            divisions: vec![empty, filled],
        };
        let (with, without) = dept.grouped_divisions();
        assert_eq!(with[0].id, "v1");
        assert_eq!(without[0].id, "v2");
    }
}
