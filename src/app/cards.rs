use leptos::{either::Either, prelude::*};

use crate::catalog::{ExperienceEntry, Icon, ProjectEntry, ServiceOffering};
use crate::theme::{button_class, ButtonVariant};

/// A link when given an `href`, otherwise a plain button.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, &class);
    match href {
        Some(href) => Either::Left(view! {
            <a href=href class=class>
                {children()}
            </a>
        }),
        None => Either::Right(view! {
            <button
                type="button"
                class=class
                on:click=move |_| {
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            >
                {children()}
            </button>
        }),
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    match icon.font_class() {
        Some(font) => {
            let class = format!("{font} {class}");
            Either::Left(view! { <i class=class aria-hidden="true"></i> })
        }
        None => Either::Right(view! {
            <span class=class aria-hidden="true">
                {icon.glyph()}
            </span>
        }),
    }
}

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional_no_strip)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="mb-12 text-center">
            <h2 class="text-3xl md:text-4xl font-bold text-slate-900 mb-4">{title}</h2>
            <div class="h-1 w-20 bg-blue-600 mx-auto rounded-full mb-4"></div>
            {subtitle.map(|s| view! { <p class="text-slate-600 max-w-2xl mx-auto">{s}</p> })}
        </div>
    }
}

#[component]
pub fn ServiceCard(service: ServiceOffering) -> impl IntoView {
    let ServiceOffering {
        icon,
        title,
        description,
        skills,
    } = service;
    view! {
        <div class="bg-white p-8 rounded-xl shadow-sm border border-slate-100 hover:shadow-md transition-shadow">
            <div class="w-12 h-12 bg-blue-100 rounded-lg flex items-center justify-center mb-6 text-blue-600 text-2xl">
                <IconGlyph icon />
            </div>
            <h3 class="text-xl font-bold text-slate-900 mb-3">{title}</h3>
            <p class="text-slate-600 mb-6 leading-relaxed">{description}</p>
            <div class="flex flex-wrap gap-2">
                {skills
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <span class="text-xs font-medium px-2 py-1 bg-slate-100 text-slate-600 rounded">
                                {skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One stop on the experience timeline. The period sits left of the rail on wide screens and
/// above the role on narrow ones; it is rendered once either way.
#[component]
pub fn ExperienceItem(entry: ExperienceEntry) -> impl IntoView {
    let ExperienceEntry {
        role,
        company,
        period,
        description,
        highlights,
    } = entry;
    view! {
        <div class="relative pl-8 md:pl-0">
            <div class="absolute left-0 top-0 bottom-0 w-px bg-slate-200 md:hidden"></div>
            <div class="absolute left-[-4px] top-2 w-2 h-2 rounded-full bg-blue-600 md:hidden"></div>

            <div class="md:grid md:grid-cols-[1fr_auto_1fr] md:gap-8 items-start group">
                <div class="md:text-right md:pt-1 mb-1 md:mb-0">
                    <span class="text-sm font-bold text-slate-400 uppercase tracking-wider">
                        {period}
                    </span>
                </div>

                <div class="hidden md:flex flex-col items-center self-stretch">
                    <div class="w-3 h-3 rounded-full bg-blue-600 group-hover:scale-125 transition-transform"></div>
                    <div class="w-px bg-slate-200 flex-grow my-2"></div>
                </div>

                <div class="pb-12">
                    <h3 class="text-xl font-bold text-slate-900">{role}</h3>
                    <div class="text-blue-600 font-medium mb-3">{company}</div>
                    <p class="text-slate-600 mb-4">{description}</p>
                    <ul class="space-y-2">
                        {highlights
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class="flex items-start text-sm text-slate-600">
                                        <IconGlyph
                                            icon=Icon::ChevronRight
                                            class="text-blue-500 mr-2 flex-shrink-0"
                                        />
                                        <span>{item}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let ProjectEntry {
        title,
        category,
        description,
        color_theme,
    } = project;
    let overlay = format!(
        "absolute inset-0 bg-gradient-to-br {color_theme} opacity-80 transition-opacity group-hover:opacity-90"
    );
    view! {
        <div class="group relative overflow-hidden rounded-xl bg-slate-900 aspect-[4/3] cursor-pointer">
            <div class=overlay></div>
            <div class="absolute inset-0 p-8 flex flex-col justify-end text-white">
                <div class="transform translate-y-4 group-hover:translate-y-0 transition-transform duration-300">
                    <div class="text-xs font-bold uppercase tracking-wider text-white/80 mb-2">
                        {category}
                    </div>
                    <h3 class="text-2xl font-bold mb-2">{title}</h3>
                    <p class="text-white/80 text-sm opacity-0 group-hover:opacity-100 transition-opacity duration-300 delay-100 line-clamp-3">
                        {description}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn assert_once_in_order(html: &str, fields: &[&str]) {
        let mut last = 0;
        for field in fields {
            assert_eq!(
                html.matches(field).count(),
                1,
                "{field:?} should appear exactly once in {html}"
            );
            let at = html.find(field).unwrap();
            assert!(at >= last, "{field:?} is out of order in {html}");
            last = at;
        }
    }

    #[test]
    fn test_experience_item_fields() {
        let owner = Owner::new();
        owner.set();
        let entry = ExperienceEntry {
            role: "Fixture Designer".to_string(),
            company: "Northwind Labs".to_string(),
            period: "Mar 2020 - Jun 2021".to_string(),
            description: "Built validation rigs for pumps.".to_string(),
            highlights: vec![
                "Cut calibration time in half.".to_string(),
                "Shipped twelve fixtures.".to_string(),
                "Wrote the test procedure manual.".to_string(),
            ],
        };
        let html = view! { <ExperienceItem entry=entry.clone() /> }.to_html();
        let mut fields = vec![
            entry.period.as_str(),
            entry.role.as_str(),
            entry.company.as_str(),
            entry.description.as_str(),
        ];
        fields.extend(entry.highlights.iter().map(String::as_str));
        assert_once_in_order(&html, &fields);
        assert_eq!(html.matches("<li").count(), 3);
    }

    #[test]
    fn test_service_card_fields() {
        let owner = Owner::new();
        owner.set();
        let service = ServiceOffering {
            icon: Icon::Cpu,
            title: "Fixture Engineering".to_string(),
            description: "Custom jigs for repeatable tests.".to_string(),
            skills: vec![
                "SolidWorks".to_string(),
                "Pneumatics".to_string(),
                "Python".to_string(),
            ],
        };
        let html = view! { <ServiceCard service=service.clone() /> }.to_html();
        assert_once_in_order(
            &html,
            &[
                Icon::Cpu.glyph(),
                "Fixture Engineering",
                "Custom jigs for repeatable tests.",
                "SolidWorks",
                "Pneumatics",
                "Python",
            ],
        );
    }

    #[test]
    fn test_project_card_fields() {
        let owner = Owner::new();
        owner.set();
        let project = ProjectEntry {
            title: "Resin Wiper".to_string(),
            category: "Product Design".to_string(),
            description: "Wiper blade iteration for a resin tank.".to_string(),
            color_theme: "from-emerald-600 to-teal-900".to_string(),
        };
        let html = view! { <ProjectCard project=project.clone() /> }.to_html();
        assert_once_in_order(
            &html,
            &[
                "from-emerald-600 to-teal-900",
                "Product Design",
                "Resin Wiper",
                "Wiper blade iteration for a resin tank.",
            ],
        );
    }

    #[test]
    fn test_button_renders_link_or_button() {
        let owner = Owner::new();
        owner.set();
        let link = view! {
            <Button variant=ButtonVariant::Secondary href="mailto:someone@example.com">
                "Email"
            </Button>
        }
        .to_html();
        assert!(link.contains("<a "));
        assert!(!link.contains("<button"));
        assert!(link.contains("href=\"mailto:someone@example.com\""));
        assert!(link.contains(ButtonVariant::Secondary.class()));

        let button = view! { <Button class="w-full">"Book"</Button> }.to_html();
        assert!(button.contains("<button"));
        assert!(!button.contains("<a "));
        assert!(button.contains(ButtonVariant::Primary.class()));
        assert!(button.contains("w-full"));
    }

    #[test]
    fn test_section_heading_subtitle_optional() {
        let owner = Owner::new();
        owner.set();
        let bare = view! { <SectionHeading title="Professional Journey" /> }.to_html();
        assert!(bare.contains("Professional Journey"));
        assert!(!bare.contains("<p"));

        let full = view! { <SectionHeading title="Services" subtitle=Some("What I offer".to_string()) /> }.to_html();
        assert!(full.contains("<p"));
        assert!(full.contains("What I offer"));
    }
}
