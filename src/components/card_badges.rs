//! Optional Card Badges
//!
//! Enrichment rendered below the card title, each piece gated by a
//! plugin display option. Values come straight out of the card's record
//! mirror; a missing or oddly-shaped field simply renders nothing.

use leptos::prelude::*;
use serde_json::Value;

use crate::context::use_app_context;
use crate::models::BoardItem;

use super::avatar::{color_from_name, initial_of};

/// Assignee display data out of the record mirror: name plus optional
/// image URL. The field must be an object carrying at least a name.
pub fn assignee_of(item: &BoardItem) -> Option<(String, Option<String>)> {
    let assignee = item.record_value("assignee")?;
    let name = assignee.get("name")?.as_str().filter(|s| !s.is_empty())?;
    let avatar = assignee
        .get("avatar")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    Some((name.to_string(), avatar))
}

/// Whether the record carries attachments worth flagging
pub fn has_attachment(item: &BoardItem) -> bool {
    match item.record_value("has_attachment") {
        Some(Value::Bool(b)) => *b,
        Some(Value::Array(files)) => !files.is_empty(),
        Some(Value::String(s)) => !s.is_empty() && s != "0" && s != "false",
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
        _ => false,
    }
}

/// ISO dates compare lexicographically; an empty side is never overdue
pub fn is_overdue(due: &str, today: &str) -> bool {
    !due.is_empty() && !today.is_empty() && due < today
}

#[cfg(target_arch = "wasm32")]
fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn today_iso() -> String {
    String::new()
}

#[component]
pub fn CardBadges(item: BoardItem) -> impl IntoView {
    let options = use_app_context().options;

    let priority_bar = options
        .show_priority_bar
        .then(|| item.record_text("priority"))
        .flatten()
        .map(|priority| {
            let color = options.priority_color(&priority);
            view! {
                <div
                    class="kanban-priority-bar"
                    style=format!("background-color: {color};")
                    title=format!("Priority: {priority}")
                ></div>
            }
        });

    let assignee = options
        .show_assignee
        .then(|| assignee_of(&item))
        .flatten()
        .map(|(name, avatar)| {
            let image = match avatar {
                Some(url) => view! {
                    <img class="kanban-assignee-avatar" src=url alt=name.clone()/>
                }
                .into_any(),
                None => {
                    let color = color_from_name(&name);
                    view! {
                        <span
                            class="kanban-assignee-initial"
                            style=format!("background-color: {color};")
                        >
                            {initial_of(&name)}
                        </span>
                    }
                    .into_any()
                }
            };
            view! {
                <div class="kanban-badge kanban-badge-assignee" title=name.clone()>
                    {image}
                    <span class="kanban-assignee-name">{name.clone()}</span>
                </div>
            }
        });

    let due_date = options
        .show_due_date
        .then(|| item.record_text("due_date"))
        .flatten()
        .map(|due| {
            let overdue = is_overdue(&due, &today_iso());
            let class = if overdue {
                "kanban-badge kanban-badge-due kanban-badge-overdue"
            } else {
                "kanban-badge kanban-badge-due"
            };
            view! { <div class=class>"📅 " {due}</div> }
        });

    let attachment = (options.show_attachment_icon && has_attachment(&item))
        .then(|| view! { <div class="kanban-badge kanban-badge-attachment">"📎"</div> });

    let custom_fields = options
        .card_custom_fields
        .iter()
        .filter_map(|field_name| {
            item.record_text(field_name).map(|text| {
                view! {
                    <div class="kanban-badge kanban-badge-field">
                        <strong>{format!("{field_name}: ")}</strong>
                        {text}
                    </div>
                }
            })
        })
        .collect::<Vec<_>>();

    view! {
        <div class="kanban-item-badges">
            {priority_bar}
            {assignee}
            {due_date}
            {attachment}
            {custom_fields}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AvatarInfo;
    use serde_json::json;

    fn item_with_values(values: Value) -> BoardItem {
        BoardItem {
            id: "item-id-1".into(),
            title: "t".into(),
            detail: String::new(),
            data_id: 1,
            table_name: "tasks".into(),
            update_url: "https://x/update".into(),
            record: json!({ "values": values }),
            avatar_info: AvatarInfo {
                name: "User".into(),
                email: String::new(),
                avatar: String::new(),
            },
            tag_field: None,
            tag_options: Vec::new(),
            current_tags: Vec::new(),
            allow_multiple_tags: true,
            raw_tag_value: None,
        }
    }

    #[test]
    fn assignee_needs_an_object_with_a_name() {
        let item = item_with_values(json!({
            "assignee": {"name": "Dana", "avatar": "https://x/d.png"}
        }));
        assert_eq!(
            assignee_of(&item),
            Some(("Dana".to_string(), Some("https://x/d.png".to_string())))
        );

        let no_image = item_with_values(json!({"assignee": {"name": "Kai"}}));
        assert_eq!(assignee_of(&no_image), Some(("Kai".to_string(), None)));

        let scalar = item_with_values(json!({"assignee": "Dana"}));
        assert_eq!(assignee_of(&scalar), None);
    }

    #[test]
    fn attachment_flag_accepts_common_shapes() {
        assert!(has_attachment(&item_with_values(json!({"has_attachment": true}))));
        assert!(has_attachment(&item_with_values(json!({"has_attachment": ["a.pdf"]}))));
        assert!(has_attachment(&item_with_values(json!({"has_attachment": "1"}))));
        assert!(!has_attachment(&item_with_values(json!({"has_attachment": []}))));
        assert!(!has_attachment(&item_with_values(json!({"has_attachment": "0"}))));
        assert!(!has_attachment(&item_with_values(json!({}))));
    }

    #[test]
    fn overdue_compares_iso_dates() {
        assert!(is_overdue("2026-08-01", "2026-08-30"));
        assert!(!is_overdue("2026-09-01", "2026-08-30"));
        assert!(!is_overdue("", "2026-08-30"));
        assert!(!is_overdue("2026-08-01", ""));
    }
}
