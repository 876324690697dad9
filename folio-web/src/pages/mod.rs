use dioxus::prelude::*;

use crate::components::layout::{
    AboutSection, BlogContentSection, BlogSection, BooksSection, GearSection, NoticeToast,
};
use crate::components::navigation::MainNav;

#[component]
pub fn Home() -> Element {
    rsx! {
        header { class: "site-header",
            h1 { class: "site-title", "Alex Doe" }
            p { class: "site-tagline", "notes, books, and gear" }
        }

        MainNav {}
        NoticeToast {}

        main { class: "content",
            AboutSection {}
            BooksSection {}
            GearSection {}
            BlogSection {}
            BlogContentSection {}
        }
    }
}
