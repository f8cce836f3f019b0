// SPDX-License-Identifier: MPL-2.0
//! Built-in contents of the static registry.
//!
//! These lists mirror what the site ships with out of the box. A TOML file
//! passed via `--content` (or the `content_path` preference) replaces them
//! wholesale; there is no per-list merging.

use super::{DisplayItem, SkillCategory};

fn item(order: usize, name: &str, image: &str, width: u32, height: u32) -> DisplayItem {
    DisplayItem {
        name: name.to_string(),
        image: image.to_string(),
        width,
        height,
        order,
        link: None,
    }
}

fn linked(order: usize, name: &str, image: &str, width: u32, height: u32, link: &str) -> DisplayItem {
    DisplayItem {
        link: Some(link.to_string()),
        ..item(order, name, image, width, height)
    }
}

pub(super) fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            title: "Core".to_string(),
            items: vec![
                item(0, "HTML", "skills/html.png", 80, 80),
                item(1, "CSS", "skills/css.png", 80, 80),
                item(2, "JavaScript", "skills/js.png", 65, 65),
                item(3, "TypeScript", "skills/ts.png", 80, 80),
                item(4, "Rust", "skills/rust.png", 80, 80),
                item(5, "Go", "skills/go.png", 80, 80),
            ],
        },
        SkillCategory {
            title: "Frontend".to_string(),
            items: vec![
                item(0, "React", "skills/react.png", 80, 80),
                item(1, "Next.js", "skills/next.png", 80, 80),
                item(2, "Tailwind CSS", "skills/tailwind.png", 80, 80),
                item(3, "Framer Motion", "skills/framer.png", 80, 80),
                item(4, "Redux", "skills/redux.png", 80, 80),
                item(5, "Iced", "skills/iced.png", 80, 80),
            ],
        },
        SkillCategory {
            title: "Backend".to_string(),
            items: vec![
                item(0, "Node.js", "skills/node.png", 80, 80),
                item(1, "Express", "skills/express.png", 80, 80),
                item(2, "PostgreSQL", "skills/postgres.png", 70, 70),
                item(3, "MongoDB", "skills/mongodb.png", 40, 40),
                item(4, "GraphQL", "skills/graphql.png", 80, 80),
                item(5, "Docker", "skills/docker.png", 80, 80),
            ],
        },
    ]
}

pub(super) fn projects() -> Vec<DisplayItem> {
    vec![
        linked(
            0,
            "Modern Space Portfolio",
            "projects/space-portfolio.png",
            1000,
            600,
            "https://codeberg.org/Bawycle/astrofolio",
        ),
        linked(
            1,
            "Interactive Website Cards",
            "projects/interactive-cards.png",
            1000,
            600,
            "https://example.com/interactive-cards",
        ),
        linked(
            2,
            "Encrypted Note Vault",
            "projects/note-vault.png",
            1000,
            600,
            "https://example.com/note-vault",
        ),
    ]
}

pub(super) fn socials() -> Vec<DisplayItem> {
    vec![
        linked(0, "GitHub", "socials/github.png", 24, 24, "https://github.com"),
        linked(
            1,
            "LinkedIn",
            "socials/linkedin.png",
            24,
            24,
            "https://www.linkedin.com",
        ),
        linked(
            2,
            "YouTube",
            "socials/youtube.png",
            24,
            24,
            "https://www.youtube.com",
        ),
    ]
}
