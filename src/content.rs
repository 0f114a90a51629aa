//! Site Content
//!
//! Static navigation, statistics and chat shortcuts. Labels are i18n keys.

use crate::models::{Department, MenuColumn, MenuLink, NavMenu, QuickAction, Stat};

fn link(label_key: &str, href: &str) -> MenuLink {
    MenuLink { label_key: label_key.to_string(), href: href.to_string() }
}

fn column(heading_key: &str, links: Vec<MenuLink>) -> MenuColumn {
    MenuColumn { heading_key: heading_key.to_string(), links }
}

pub fn navigation() -> Vec<NavMenu> {
    vec![
        NavMenu {
            id: "about".into(),
            label_key: "nav.about".into(),
            columns: vec![
                column("nav.about_us", vec![
                    link("nav.our_story", "about.html#story"),
                    link("nav.leadership", "about.html#leadership"),
                    link("nav.accreditation", "about.html#accreditation"),
                ]),
                column("nav.our_team", vec![
                    link("nav.doctors", "doctors.html"),
                    link("nav.careers", "careers.html"),
                ]),
            ],
        },
        NavMenu {
            id: "departments".into(),
            label_key: "nav.departments".into(),
            columns: vec![
                column("nav.fertility", vec![
                    link("nav.ivf", "departments/ivf.html"),
                    link("nav.icsi", "departments/icsi.html"),
                    link("nav.preservation", "departments/preservation.html"),
                ]),
                column("nav.womens_health", vec![
                    link("nav.obstetrics", "departments/obstetrics.html"),
                    link("nav.gynecology", "departments/gynecology.html"),
                ]),
                column("nav.diagnostics", vec![
                    link("nav.andrology", "departments/andrology.html"),
                    link("nav.laboratory", "departments/laboratory.html"),
                ]),
            ],
        },
        NavMenu {
            id: "patients".into(),
            label_key: "nav.patients".into(),
            columns: vec![
                column("nav.visit", vec![
                    link("nav.appointments", "appointments.html"),
                    link("nav.locations", "locations.html"),
                    link("nav.insurance", "insurance.html"),
                ]),
                column("nav.resources", vec![
                    link("nav.faq", "faq.html"),
                    link("nav.contact", "contact.html"),
                ]),
            ],
        },
    ]
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat { label_key: "stats.years".into(), target: "25".into(), suffix: "+".into() },
        Stat { label_key: "stats.babies".into(), target: "15000".into(), suffix: "+".into() },
        Stat { label_key: "stats.specialists".into(), target: "120".into(), suffix: String::new() },
        Stat { label_key: "stats.rating".into(), target: "4.5".into(), suffix: "/5".into() },
    ]
}

fn department(slug: &str, icon: &str) -> Department {
    Department {
        label_key: format!("nav.{}", slug),
        description_key: format!("departments.{}", slug),
        icon: icon.to_string(),
        href: format!("departments/{}.html", slug),
    }
}

pub fn departments() -> Vec<Department> {
    vec![
        department("ivf", "fas fa-flask"),
        department("icsi", "fas fa-microscope"),
        department("obstetrics", "fas fa-baby"),
        department("andrology", "fas fa-user-md"),
    ]
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction { label_key: "chatbot.quick.appointment".into(), message: "I want to book an appointment".into() },
        QuickAction { label_key: "chatbot.quick.treatments".into(), message: "What treatments do you offer?".into() },
        QuickAction { label_key: "chatbot.quick.location".into(), message: "Where is your location?".into() },
        QuickAction { label_key: "chatbot.quick.contact".into(), message: "How can I contact you?".into() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::{KeywordResolver, Topic};
    use crate::i18n::{Language, Translations};

    #[test]
    fn test_quick_actions_hit_their_topics() {
        let resolver = KeywordResolver::default();
        let topics: Vec<Option<Topic>> = quick_actions().iter().map(|q| resolver.topic_for(&q.message)).collect();
        assert_eq!(
            topics,
            vec![Some(Topic::Appointment), Some(Topic::Treatments), Some(Topic::Location), Some(Topic::Contact)]
        );
    }

    #[test]
    fn test_menu_ids_are_unique_slugs() {
        let ids: Vec<String> = navigation().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["about", "departments", "patients"]);
        assert!(ids.iter().all(|id| id.chars().all(|c| c.is_ascii_lowercase() || c == '-')));
    }

    #[test]
    fn test_every_label_is_translated() {
        let t = Translations::from_json(
            include_str!("../public/locales/en.json"),
            include_str!("../public/locales/ar.json"),
        )
        .unwrap();

        let mut keys: Vec<String> = Vec::new();
        for menu in navigation() {
            keys.push(menu.label_key);
            for col in menu.columns {
                keys.push(col.heading_key);
                keys.extend(col.links.into_iter().map(|l| l.label_key));
            }
        }
        keys.extend(stats().into_iter().map(|s| s.label_key));
        keys.extend(quick_actions().into_iter().map(|q| q.label_key));
        for dept in departments() {
            keys.push(dept.label_key);
            keys.push(dept.description_key);
        }
        keys.push("departments.title".to_string());

        for key in keys {
            for lang in Language::ALL {
                assert!(t.lookup(lang, &key).is_some(), "missing {} in {:?}", key, lang);
            }
        }
    }
}
