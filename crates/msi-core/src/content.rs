//! Static page content.
//!
//! Copy and asset paths for the home page sections. Kept as data so the
//! pages stay layout-only.

/// A card in the services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// One figure in the impact counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImpactStat {
    /// Target value the counter climbs to
    pub value: u32,
    /// Appended after the number (`+`, `%`)
    pub suffix: &'static str,
    pub label: &'static str,
}

impl ImpactStat {
    /// Display text for the counter at `progress` (`0.0..=1.0`) of its run.
    pub fn display_at(&self, progress: f64) -> String {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let current = (f64::from(self.value) * progress).round() as u32;
        format!("{}{}", current, self.suffix)
    }

    pub fn display(&self) -> String {
        self.display_at(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const ABOUT_HIGHLIGHTS: &[&str] = &[
    "Hands-on learning experiences",
    "Mentorship programs",
    "STEM workshops and events",
    "Community outreach initiatives",
];

pub const ABOUT_TEXT: &str = "We are dedicated to bridging the gap between classroom learning \
and real-life application of Maths and Science. Our mission is to inspire and empower the youth \
through innovative educational programs.";

pub const SERVICES: &[Service] = &[
    Service {
        title: "Tutoring",
        icon: "🎓",
        description: "One-on-one and group tutoring sessions in mathematics and science subjects.",
    },
    Service {
        title: "Workshops",
        icon: "🔬",
        description: "Interactive workshops focusing on practical applications of STEM concepts.",
    },
    Service {
        title: "STEM Camps",
        icon: "🏕️",
        description: "Immersive camps that combine learning with fun outdoor activities.",
    },
];

pub const IMPACT_STATS: &[ImpactStat] = &[
    ImpactStat {
        value: 5000,
        suffix: "+",
        label: "Students Reached",
    },
    ImpactStat {
        value: 50,
        suffix: "+",
        label: "Schools Partnered",
    },
    ImpactStat {
        value: 100,
        suffix: "+",
        label: "Workshops Conducted",
    },
    ImpactStat {
        value: 90,
        suffix: "%",
        label: "Student Satisfaction",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The Saturday tutoring sessions turned maths from my worst subject into the one I look forward to.",
        author: "Sinethemba M.",
        role: "Grade 11 learner",
    },
    Testimonial {
        quote: "Our learners came back from the STEM camp asking questions we had never heard from them before.",
        author: "Mrs. N. Dlamini",
        role: "Science teacher, partner school",
    },
    Testimonial {
        quote: "Mentoring with MSI showed me that the science I study at university can change my own community.",
        author: "Lwazi K.",
        role: "Volunteer mentor",
    },
];

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "/images/gallery/workshop.jpg",
        alt: "Learners building circuits at a workshop",
    },
    GalleryImage {
        src: "/images/gallery/camp.jpg",
        alt: "STEM camp outdoor experiment",
    },
    GalleryImage {
        src: "/images/gallery/tutoring.jpg",
        alt: "Group tutoring session",
    },
    GalleryImage {
        src: "/images/gallery/outreach.jpg",
        alt: "Community outreach day",
    },
    GalleryImage {
        src: "/images/gallery/mentors.jpg",
        alt: "Mentors with learners",
    },
    GalleryImage {
        src: "/images/Outdoor.jpg",
        alt: "Students learning outdoors",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_display_with_suffix() {
        let labels: Vec<_> = IMPACT_STATS.iter().map(|s| s.display()).collect();
        assert_eq!(labels, ["5000+", "50+", "100+", "90%"]);
    }

    #[test]
    fn counter_progress_is_clamped() {
        let stat = IMPACT_STATS[0];
        assert_eq!(stat.display_at(0.0), "0+");
        assert_eq!(stat.display_at(0.5), "2500+");
        assert_eq!(stat.display_at(2.0), "5000+");
        assert_eq!(stat.display_at(f64::NAN), "0+");
    }

    #[test]
    fn three_services() {
        let titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Tutoring", "Workshops", "STEM Camps"]);
    }
}
