use serde::Serialize;
use std::collections::HashMap;

/// One member of one group, as produced by the membership join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub group_id: String,
    pub group_name: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub group_id: String,
    pub group_name: String,
    #[serde(rename = "full_name")]
    pub member_names: Vec<String>,
}

/// Folds membership rows into one summary per group.
///
/// Groups keep the order in which their id first appears and members keep row
/// order. The group name is taken from the first row of each group. Returns
/// `None` when there are no rows at all.
pub fn group_members<I>(rows: I) -> Option<Vec<GroupSummary>>
where
    I: IntoIterator<Item = MemberRow>,
{
    let mut groups: Vec<GroupSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.group_id.clone()).or_insert_with(|| {
            groups.push(GroupSummary {
                group_id: row.group_id.clone(),
                group_name: row.group_name.clone(),
                member_names: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].member_names.push(row.full_name);
    }

    if groups.is_empty() { None } else { Some(groups) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(group_id: &str, group_name: &str, full_name: &str) -> MemberRow {
        MemberRow {
            group_id: group_id.to_string(),
            group_name: group_name.to_string(),
            full_name: full_name.to_string(),
        }
    }

    #[test]
    fn groups_in_first_seen_order() {
        let rows = vec![
            row("g1", "A", "Alice"),
            row("g1", "A", "Bob"),
            row("g2", "B", "Carl"),
        ];

        let groups = group_members(rows).unwrap();
        assert_eq!(
            groups,
            vec![
                GroupSummary {
                    group_id: "g1".to_string(),
                    group_name: "A".to_string(),
                    member_names: vec!["Alice".to_string(), "Bob".to_string()],
                },
                GroupSummary {
                    group_id: "g2".to_string(),
                    group_name: "B".to_string(),
                    member_names: vec!["Carl".to_string()],
                },
            ]
        );
    }

    #[test]
    fn interleaved_rows_are_not_sorted() {
        let rows = vec![
            row("g2", "B", "Carl"),
            row("g1", "A", "Alice"),
            row("g2", "B", "Dana"),
        ];

        let groups = group_members(rows).unwrap();
        assert_eq!(groups[0].group_id, "g2");
        assert_eq!(groups[0].member_names, vec!["Carl", "Dana"]);
        assert_eq!(groups[1].group_id, "g1");
    }

    #[test]
    fn name_captured_once() {
        let rows = vec![row("g1", "First", "Alice"), row("g1", "Renamed", "Bob")];
        let groups = group_members(rows).unwrap();
        assert_eq!(groups[0].group_name, "First");
    }

    #[test]
    fn empty_input_is_absent() {
        assert!(group_members(Vec::new()).is_none());
    }

    #[test]
    fn serializes_members_as_full_name() {
        let groups = group_members(vec![row("g1", "A", "Alice")]).unwrap();
        let json = serde_json::to_value(&groups).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "group_id": "g1", "group_name": "A", "full_name": ["Alice"] }])
        );
    }
}
