//! Fixed site content: navigation, the work grid, and per-project assets.

pub(crate) struct NavItem {
    pub(crate) label: &'static str,
    pub(crate) anchor: &'static str,
}

pub(crate) const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "Projects",
        anchor: "work",
    },
    NavItem {
        label: "About",
        anchor: "about",
    },
    NavItem {
        label: "Contact",
        anchor: "contact",
    },
];

/// Section ids the home view renders; nav anchors must stay within these.
pub(crate) const HOME_SECTION_IDS: [&str; 3] = ["work", "about", "contact"];

pub(crate) const CONTACT_EMAIL: &str = "hello@sakuhinshu.studio";

/// How a work tile renders in the grid.
pub(crate) enum WorkTile {
    Image { src: &'static str },
    SolidColor {
        background: &'static str,
        logo: Option<&'static str>,
    },
}

/// Which project page a work item opens.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProjectKind {
    CaseStudy,
    Gallery,
    MenuGraphics,
}

pub(crate) struct WorkItem {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) subtitle: &'static str,
    pub(crate) category: &'static str,
    pub(crate) kind: ProjectKind,
    pub(crate) tile: WorkTile,
}

pub(crate) const WORK_ITEMS: [WorkItem; 6] = [
    WorkItem {
        id: "w1",
        title: "Linko",
        subtitle: "Redefining the Live Music Social Experience",
        category: "UI/UX",
        kind: ProjectKind::CaseStudy,
        tile: WorkTile::Image {
            src: "/img/linko/linko_header.jpg",
        },
    },
    WorkItem {
        id: "w2",
        title: "Jargon Merch",
        subtitle: "Merchandise Design",
        category: "Graphic Design",
        kind: ProjectKind::Gallery,
        tile: WorkTile::SolidColor {
            background: "#2b4bd8",
            logo: Some("/img/jargon/jargon_logo.svg"),
        },
    },
    WorkItem {
        id: "w3",
        title: "Seasonal Menus",
        subtitle: "Print & Identity",
        category: "Graphic Design",
        kind: ProjectKind::MenuGraphics,
        tile: WorkTile::Image {
            src: "/img/menus/menu_header.jpg",
        },
    },
    WorkItem {
        id: "w4",
        title: "Kinetic Type",
        subtitle: "Motion Graphic",
        category: "Motion",
        kind: ProjectKind::CaseStudy,
        tile: WorkTile::SolidColor {
            background: "#00a699",
            logo: None,
        },
    },
    WorkItem {
        id: "w5",
        title: "Spectra",
        subtitle: "Senior Capstone Project",
        category: "UI/UX",
        kind: ProjectKind::CaseStudy,
        tile: WorkTile::Image {
            src: "/img/spectra/spectra_header.jpg",
        },
    },
    WorkItem {
        id: "w6",
        title: "Public Library",
        subtitle: "Product Design",
        category: "Product",
        kind: ProjectKind::CaseStudy,
        tile: WorkTile::Image {
            src: "/img/library/library_header.jpg",
        },
    },
];

pub(crate) fn work_item(id: &str) -> Option<&'static WorkItem> {
    WORK_ITEMS.iter().find(|item| item.id == id)
}

pub(crate) struct CaseSection {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) body: &'static str,
}

pub(crate) const CASE_SECTIONS: [CaseSection; 6] = [
    CaseSection {
        id: "overview",
        title: "01. Overview",
        body: "A short framing of the project: who it is for, what it ships, and the role design played from the first sketch to the final handoff.",
    },
    CaseSection {
        id: "problem",
        title: "02. Problem",
        body: "The friction the existing experience created for its users, and the constraints the team agreed to design within.",
    },
    CaseSection {
        id: "research",
        title: "03. Research",
        body: "Interviews, comparative teardowns, and the usability sessions that narrowed the direction before any pixels were final.",
    },
    CaseSection {
        id: "process",
        title: "04. Process",
        body: "Flows, wireframes, and the iterations between them. Each round traded scope for clarity until the core path held up.",
    },
    CaseSection {
        id: "visuals",
        title: "05. Visuals",
        body: "The visual system: type, color, and component decisions, with the screens that carry the final experience.",
    },
    CaseSection {
        id: "outcome",
        title: "06. Outcome",
        body: "What shipped, what the team measured afterwards, and what a next iteration would take on first.",
    },
];

pub(crate) struct CarouselImage {
    pub(crate) src: &'static str,
    pub(crate) alt: &'static str,
    pub(crate) label: &'static str,
}

/// Center-focused picker on the menu graphics page. Initial center 0.
pub(crate) const MENU_IMAGES: [CarouselImage; 5] = [
    CarouselImage {
        src: "/img/menus/menu-spring.png",
        alt: "Spring menu spread",
        label: "Spring",
    },
    CarouselImage {
        src: "/img/menus/menu-summer.png",
        alt: "Summer menu spread",
        label: "Summer",
    },
    CarouselImage {
        src: "/img/menus/menu-autumn.png",
        alt: "Autumn menu spread",
        label: "Autumn",
    },
    CarouselImage {
        src: "/img/menus/menu-winter.png",
        alt: "Winter menu spread",
        label: "Winter",
    },
    CarouselImage {
        src: "/img/menus/menu-tasting.png",
        alt: "Tasting menu spread",
        label: "Tasting",
    },
];

/// Team-photo ring on the gallery page. Initial center 1.
pub(crate) const TEAM_PHOTOS: [CarouselImage; 6] = [
    CarouselImage {
        src: "/img/jargon/team/team-1.jpg",
        alt: "Team photo 1",
        label: "",
    },
    CarouselImage {
        src: "/img/jargon/team/team-2.jpg",
        alt: "Team photo 2",
        label: "",
    },
    CarouselImage {
        src: "/img/jargon/team/team-3.jpg",
        alt: "Team photo 3",
        label: "",
    },
    CarouselImage {
        src: "/img/jargon/team/team-4.jpg",
        alt: "Team photo 4",
        label: "",
    },
    CarouselImage {
        src: "/img/jargon/team/team-5.jpg",
        alt: "Team photo 5",
        label: "",
    },
    CarouselImage {
        src: "/img/jargon/team/team-6.jpg",
        alt: "Team photo 6",
        label: "",
    },
];

pub(crate) struct GalleryImage {
    pub(crate) src: &'static str,
    pub(crate) alt: &'static str,
}

pub(crate) struct GallerySection {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) paragraph: &'static str,
    pub(crate) images: &'static [GalleryImage],
}

pub(crate) const GALLERY_SECTIONS: [GallerySection; 3] = [
    GallerySection {
        id: "brochure",
        title: "Brochure",
        paragraph: "A portable trifold that carries the brand messaging and product overview into events and partner conversations.",
        images: &[
            GalleryImage {
                src: "/img/jargon/brochure-1.png",
                alt: "Brochure spread 1",
            },
            GalleryImage {
                src: "/img/jargon/brochure-2.png",
                alt: "Brochure spread 2",
            },
            GalleryImage {
                src: "/img/jargon/brochure-3.png",
                alt: "Brochure spread 3",
            },
        ],
    },
    GallerySection {
        id: "tshirt",
        title: "T-shirt",
        paragraph: "Shirts extend the palette and typography into everyday wear, with a custom avatar on the back of each team member's print.",
        images: &[
            GalleryImage {
                src: "/img/jargon/tshirt-1.png",
                alt: "T-shirt front",
            },
            GalleryImage {
                src: "/img/jargon/tshirt-2.png",
                alt: "T-shirt back",
            },
            GalleryImage {
                src: "/img/jargon/tshirt-3.png",
                alt: "T-shirt detail",
            },
            GalleryImage {
                src: "/img/jargon/tshirt-4.png",
                alt: "T-shirt lineup",
            },
        ],
    },
    GallerySection {
        id: "businesscard",
        title: "Business card",
        paragraph: "Card design aligned with the identity for print and handoff.",
        images: &[GalleryImage {
            src: "/img/jargon/business-card.png",
            alt: "Business card",
        }],
    },
];
