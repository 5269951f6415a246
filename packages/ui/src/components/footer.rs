use dioxus::prelude::*;

use crate::{brand_icons, icons};
use crate::Icon;

const INSTAGRAM_URL: &str = "https://www.instagram.com/himtiuinjkt";
const EMAIL: &str = "himti@uinjkt.ac.id";

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-brand",
                strong { "HIMTI UIN Jakarta" }
                p { "Himpunan Mahasiswa Teknik Informatika" }
            }
            div {
                class: "footer-links",
                a {
                    href: INSTAGRAM_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { icon: brand_icons::FaInstagram, width: 14, height: 14 }
                    " Instagram"
                }
                a {
                    href: "mailto:{EMAIL}",
                    Icon { icon: icons::FaEnvelope, width: 14, height: 14 }
                    " {EMAIL}"
                }
            }
        }
    }
}
