//! Card Avatar
//!
//! Shows the resolved avatar image; when the URL is missing or fails to
//! load, falls back to a colored initial badge keyed deterministically by
//! the display name.

use leptos::prelude::*;

use crate::models::AvatarInfo;

/// Palette for initial fallbacks; index chosen by name hash
const AVATAR_COLORS: [&str; 18] = [
    "#1abc9c", "#2ecc71", "#3498db", "#9b59b6", "#34495e", "#16a085", "#27ae60", "#2980b9",
    "#8e44ad", "#2c3e50", "#f1c40f", "#e67e22", "#e74c3c", "#95a5a6", "#f39c12", "#d35400",
    "#c0392b", "#bdc3c7",
];

/// Deterministic background color for a display name
pub fn color_from_name(name: &str) -> &'static str {
    if name.is_empty() {
        return "#bdc3c7";
    }
    let sum = name
        .encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_add(u32::from(unit)));
    AVATAR_COLORS[sum as usize % AVATAR_COLORS.len()]
}

/// Uppercased first character of the display name
pub fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

#[component]
pub fn Avatar(info: AvatarInfo) -> impl IntoView {
    let (image_failed, set_image_failed) = signal(false);
    let name = info.name.clone();
    let url = info.avatar.clone();

    view! {
        {move || {
            let name = name.clone();
            if !url.is_empty() && !image_failed.get() {
                view! {
                    <div class="kanban-avatar-image">
                        <img
                            src=url.clone()
                            alt=name.clone()
                            title=name.clone()
                            on:error=move |_| set_image_failed.set(true)
                        />
                    </div>
                }
                .into_any()
            } else {
                let color = color_from_name(&name);
                view! {
                    <div
                        class="kanban-avatar-initial"
                        style=format!("background-color: {color};")
                        title=name.clone()
                    >
                        {initial_of(&name)}
                    </div>
                }
                .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_deterministic_per_name() {
        assert_eq!(color_from_name("Dana"), color_from_name("Dana"));
        assert_eq!(color_from_name(""), "#bdc3c7");
        assert!(AVATAR_COLORS.contains(&color_from_name("Kai")));
    }

    #[test]
    fn initial_is_the_uppercased_first_character() {
        assert_eq!(initial_of("dana"), "D");
        assert_eq!(initial_of("Ágnes"), "Á");
        assert_eq!(initial_of(""), "");
    }
}
