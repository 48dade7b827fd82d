use super::*;

#[test]
fn section_ids_follow_page_order() {
    let ids: Vec<_> = NAV_ITEMS.iter().map(|item| item.section_id).collect();
    assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
}

#[test]
fn skill_levels_are_percentages() {
    for category in SKILL_CATEGORIES {
        assert!(!category.skills.is_empty(), "{} has no skills", category.title);
        for skill in category.skills {
            assert!(skill.level <= 100, "{} level out of range", skill.name);
        }
    }
}

#[test]
fn projects_link_to_repositories() {
    for project in PROJECTS {
        assert!(project.repository.starts_with("https://github.com/"));
        assert!(!project.features.is_empty());
        assert!(project.image.starts_with("/assets/"));
    }
}

#[test]
fn mailto_link_stays_in_tab() {
    let email = SOCIAL_LINKS.iter().find(|l| l.label == "Email").unwrap();
    assert!(!email.opens_new_tab());
    let github = SOCIAL_LINKS.iter().find(|l| l.label == "GitHub").unwrap();
    assert!(github.opens_new_tab());
}

#[test]
fn copyright_line_formats_year() {
    assert_eq!(copyright_line(2026), "© 2026 All rights reserved.");
}

#[test]
fn hero_text_continuations_keep_single_spaces() {
    assert!(!HERO_SUMMARY.contains("  "));
    for paragraph in ABOUT_PARAGRAPHS {
        assert!(!paragraph.contains("  "));
    }
    for project in PROJECTS {
        assert!(!project.description.contains("  "));
    }
}

#[test]
fn floating_lanes_stay_above_bottom_margin() {
    let height = 1000.0;
    for index in 0..FLOATING_SKILLS.len() {
        let lane = floating_lane(index, height);
        assert!((0.0..height - 100.0).contains(&lane), "lane {lane} for {index}");
    }
    assert!((floating_lane(3, height) - 300.0).abs() < f64::EPSILON);
    assert!((floating_lane(9, height) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn floating_lane_tolerates_tiny_containers() {
    let lane = floating_lane(4, 50.0);
    assert!(lane.is_finite());
}
