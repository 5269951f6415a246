use dioxus::prelude::*;
use ui::components::{ErrorMessage, Spinner};
use ui::use_departments;

use crate::Route;

const ABOUT: &str = "merupakan wadah silaturahmi dan pemersatu antar Mahasiswa dengan \
Alumni Program Studi Teknik Informatika UIN Syarif Hidayatullah Jakarta, serta berfungsi \
sebagai penyelenggara kegiatan untuk kemahasiswaan, penalaran, dan keilmuan di bidang \
teknologi informasi.";

const VISION: &str = "Menjadikan HIMTI UIN Syarif Hidayatullah Jakarta sebagai wadah \
pengembangan potensi diri dan penyambung aspirasi mahasiswa program studi Teknik \
Informatika UIN Syarif Hidayatullah Jakarta yang berlandaskan kekeluargaan.";

const MISSIONS: &[&str] = &[
    "Memberdayakan HIMTI sebagai sarana pengembangan diri minat dan bakat maupun keilmuan \
     mahasiswa program studi Teknik Informatika UIN Syarif Hidayatullah Jakarta.",
    "Mengoptimalkan peran HIMTI sebagai penyambung aspirasi mahasiswa program studi Teknik \
     Informatika UIN Syarif Hidayatullah Jakarta.",
    "Mempererat hubungan baik pengurus dan non-pengurus HIMTI UIN Syarif Hidayatullah Jakarta \
     serta civitas akademika UIN Syarif Hidayatullah Jakarta.",
];

const ANTHEM: &str = "Bangkitlah bersama HIMTI
Bersama membangun negri
Terbentuknya jiwa madani
Terciptanya reformasi
Kami teknik informatika
Satukan langkah tingkatkan kinerja
Dengan tekad mengemban asa
Untuk negri tercinta
Membentuk dalam satu jiwa
Bersatu dalam satu nyawa
Kobarkan semangat dalam jiwa
Membangun Indonesia digital
Janganlah ragu untuk berkarya
Menjunjung tinggi informatika
Menjunjung tinggi informatika";

/// About the organization: vision, mission, anthem and the board structure.
#[component]
pub fn Profile() -> Element {
    rsx! {
        section {
            class: "container",
            h1 { class: "page-title center", "Apa itu HIMTI UIN Jakarta?" }
            p {
                class: "lead",
                strong { "HIMTI UIN Syarif Hidayatullah Jakarta " }
                "{ABOUT}"
            }
            div {
                class: "grid grid-2",
                div {
                    h2 { "Visi" }
                    p { "{VISION}" }
                }
                div {
                    h2 { "Misi" }
                    ol {
                        for mission in MISSIONS {
                            li { "{mission}" }
                        }
                    }
                }
            }
            hr {}
            h2 { class: "center", "Mars HIMTI" }
            p { class: "lyrics", "{ANTHEM}" }
            hr {}
            h2 { class: "center", "Struktur Kepengurusan" }
            Structure {}
        }
    }
}

/// The BPH node on top, every other department below it.
#[component]
fn Structure() -> Element {
    let departments = use_departments();
    let list = departments.departments();
    let (board, rest): (Vec<_>, Vec<_>) = list.into_iter().partition(|d| d.slug == "bph");

    rsx! {
        if departments.loading() {
            Spinner {}
        } else if let Some(error) = departments.error() {
            ErrorMessage {
                message: error,
                on_retry: move |_| {
                    spawn(async move { departments.refresh().await });
                },
            }
        } else {
            div {
                class: "structure",
                div {
                    class: "structure-top",
                    if board.is_empty() {
                        Link { class: "structure-node", to: Route::Bph {}, "BPH" }
                    }
                    for department in board {
                        Link {
                            key: "{department.id}",
                            class: "structure-node",
                            to: Route::Bph {},
                            "{department.department}"
                        }
                    }
                }
                div {
                    class: "structure-row",
                    for department in rest {
                        Link {
                            key: "{department.id}",
                            class: "structure-node",
                            to: Route::DepartmentDetail { slug: department.slug.clone() },
                            "{department.department}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Information() -> Element {
    rsx! {
        section {
            class: "container",
            h1 { class: "page-title", "Kanal Informasi HIMTI UIN Jakarta" }
            p {
                class: "lead",
                strong { "HIMTI UIN Syarif Hidayatullah Jakarta " }
                "{ABOUT}"
            }
        }
    }
}
