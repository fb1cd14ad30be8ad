use dioxus::prelude::*;

use site::seo::PageMeta;

use crate::components::section::{Section, SectionTitle, Seo};

// there is no backend behind the form; submitting only acknowledges it on the page
#[component]
pub fn ContactPage() -> Element {
    let mut sent = use_signal(|| false);

    rsx! {
        Seo {
            meta: PageMeta::titled("Contact")
                .with_description("Tell us about your project and we will get back to you."),
        }

        Section {
            SectionTitle { title: "Let's Build Together", subtitle: "Contact Us" }
            if sent() {
                p { class: "form-notice", role: "status",
                    "Thanks for reaching out. We will get back to you shortly."
                }
            } else {
                form {
                    class: "contact-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        sent.set(true);
                    },
                    label { "Full name"
                        input { r#type: "text", name: "full-name", autocomplete: "name", required: true }
                    }
                    label { "Email"
                        input { r#type: "email", name: "email", autocomplete: "email", required: true }
                    }
                    label { "Company"
                        input { r#type: "text", name: "company", autocomplete: "organization" }
                    }
                    label { "Message"
                        textarea { name: "message", rows: "4" }
                    }
                    button { class: "btn btn-primary btn-block", r#type: "submit", "Submit" }
                }
            }
        }
    }
}
