use api::{Division, Member};
use dioxus::prelude::*;

use crate::icons;
use crate::Icon;

#[component]
pub fn MemberCard(member: Member) -> Element {
    let class = if member.is_lead() { "member-card lead" } else { "member-card" };

    rsx! {
        div {
            class: "{class}",
            if let Some(photo) = member.photo_url() {
                img { class: "member-photo", src: "{photo}", alt: "{member.name}" }
            } else {
                div {
                    class: "member-photo member-photo-empty",
                    Icon { icon: icons::FaUser, width: 28, height: 28 }
                }
            }
            if !member.role.is_empty() {
                span { class: "member-role", "{member.role}" }
            }
            p { class: "member-name", "{member.name}" }
            p { class: "member-position", "{member.position}" }
        }
    }
}

/// A division heading followed by its members, leads first.
#[component]
pub fn DivisionSection(division: Division) -> Element {
    let members: Vec<Member> = division.sorted_members().into_iter().cloned().collect();

    rsx! {
        section {
            class: "division",
            h3 { class: "division-title", "{division.division}" }
            if members.is_empty() {
                p { class: "muted", "No members listed yet." }
            } else {
                div {
                    class: "member-grid",
                    for member in members {
                        MemberCard { key: "{member.id}", member }
                    }
                }
            }
        }
    }
}
