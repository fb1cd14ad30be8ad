use dioxus::prelude::*;

use site::{
    content::{Solution, SolutionCategory, solutions_in},
    seo::PageMeta,
};

use crate::components::{
    icons::ContentIcon,
    section::{Section, SectionTitle, Seo},
};

#[component]
fn SolutionCard(solution: Solution) -> Element {
    rsx! {
        div { class: "card",
            if let Some(icon) = solution.icon {
                span { class: "feature-icon", ContentIcon { icon } }
            }
            h4 { class: "card-title", "{solution.title}" }
            p { class: "card-text", "{solution.description}" }
        }
    }
}

#[component]
fn SolutionGroup(category: SolutionCategory) -> Element {
    rsx! {
        h3 { class: "card-title", "{category.label()}" }
        div { class: "card-grid",
            for solution in solutions_in(category) {
                SolutionCard { key: "{solution.title}", solution: *solution }
            }
        }
    }
}

#[component]
pub fn SolutionsPage() -> Element {
    rsx! {
        Seo {
            meta: PageMeta::titled("Solutions")
                .with_description("Industry and use-case solutions for finance, healthcare, retail, real-time analytics, MLOps, and generative AI."),
        }

        Section {
            SectionTitle { title: "Tailored for Your Needs", subtitle: "Solutions" }
            p { class: "section-subtitle",
                "We apply our deep technical expertise to solve the unique challenges of your industry and use case."
            }
            SolutionGroup { category: SolutionCategory::ByIndustry }
        }

        Section { muted: true,
            SolutionGroup { category: SolutionCategory::ByUseCase }
        }
    }
}
