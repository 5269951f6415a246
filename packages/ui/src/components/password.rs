//! Password field with a visibility toggle, and the strength meter shown
//! under it on the registration and reset forms.

use dioxus::prelude::*;

use crate::icons;
use crate::Icon;

const LABELS: [&str; 5] = ["Very Weak", "Weak", "Moderate", "Strong", "Very Strong"];
const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;
const MIN_BAR_PERCENT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    /// 0 for passwords under eight characters, at most 6.
    pub score: u8,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        LABELS[usize::from(self.score.min(4))]
    }

    pub fn color_class(&self) -> &'static str {
        match self.score {
            0..=2 => "strength-red",
            3 => "strength-orange",
            _ => "strength-green",
        }
    }

    /// Bar width in percent.
    pub fn percent(&self) -> u32 {
        let percent = (u32::from(self.score) * 100).div_ceil(5);
        percent.clamp(MIN_BAR_PERCENT, 100)
    }
}

pub fn password_strength(password: &str) -> Strength {
    let length = password.chars().count();
    if length < MIN_LENGTH {
        return Strength { score: 0 };
    }
    let checks = [
        length >= LONG_LENGTH,
        password.chars().any(|c| c.is_lowercase()),
        password.chars().any(|c| c.is_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_alphanumeric()),
    ];
    let score = 1 + checks.iter().filter(|passed| **passed).count() as u8;
    Strength { score }
}

#[component]
pub fn PasswordInput(
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "Password".to_string())] placeholder: String,
    #[props(default = "password".to_string())] name: String,
) -> Element {
    let mut visible = use_signal(|| false);
    let kind = if visible() { "text" } else { "password" };

    rsx! {
        div {
            class: "password-input",
            input {
                class: "input",
                r#type: "{kind}",
                name: "{name}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
            button {
                r#type: "button",
                class: "password-toggle",
                title: if visible() { "Hide password" } else { "Show password" },
                onclick: move |_| visible.toggle(),
                if visible() {
                    Icon { icon: icons::FaEyeSlash, width: 16, height: 16 }
                } else {
                    Icon { icon: icons::FaEye, width: 16, height: 16 }
                }
            }
        }
    }
}

#[component]
pub fn PasswordStrengthMeter(password: String) -> Element {
    if password.is_empty() {
        return rsx! {};
    }
    let strength = password_strength(&password);

    rsx! {
        div {
            class: "strength",
            div {
                class: "strength-track",
                div {
                    class: "strength-bar {strength.color_class()}",
                    style: "width: {strength.percent()}%",
                }
            }
            span { class: "strength-label", "{strength.label()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_passwords_score_zero() {
        let strength = password_strength("Ab1!");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label(), "Very Weak");
        assert_eq!(strength.percent(), 5);
        assert_eq!(strength.color_class(), "strength-red");
    }

    #[test]
    fn test_scores_add_up() {
        assert_eq!(password_strength("abcdefgh").score, 2);
        assert_eq!(password_strength("abcdefgH").score, 3);
        assert_eq!(password_strength("abcdefH1").score, 4);
        assert_eq!(password_strength("abcdefH1!").score, 5);
        assert_eq!(password_strength("abcdefgH1!xyz").score, 6);
    }

    #[test]
    fn test_label_colour_and_width() {
        let strong = password_strength("abcdefgH");
        assert_eq!(strong.label(), "Strong");
        assert_eq!(strong.color_class(), "strength-orange");
        assert_eq!(strong.percent(), 60);

        let best = password_strength("abcdefgH1!xyz");
        assert_eq!(best.label(), "Very Strong");
        assert_eq!(best.color_class(), "strength-green");
        assert_eq!(best.percent(), 100);
    }
}
