//! Static site content. Read-only; widgets index into these slices.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Partner,
    Staff,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Partner => "partner",
            Category::Staff => "staff",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
    pub category: Category,
}

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Bylgja Hrönn Björnsdóttir",
        title: "Partner - IP Attorney",
        bio: "Bylgja joined Tego as a Partner in 2016. She is an IP Attorney with over 13 years' experience of working with IPR and is an experienced practitioner both before the Icelandic authorities and the EUIPO.",
        image: "photos/person1.jpg",
        category: Category::Partner,
    },
    TeamMember {
        name: "Helga Guðmundsdóttir",
        title: "Lawyer",
        bio: "Helga completed a Bachelor's degree in Law from the University of Iceland in 2013, a Master's degree in International Law and the Settlement of Disputes from the United Nations mandated University for Peace in 2014 and is completing a Mag.",
        image: "photos/person2.png",
        category: Category::Staff,
    },
    TeamMember {
        name: "Lovísa Jónsdóttir",
        title: "Partner - IP Attorney",
        bio: "Lovísa is a founding Partner of Tego IP Consulting. She is an IP Attorney and has worked with IPR´s since 2003. Throughout her carreer Lovisa has been working with a wide range of IPR's for a versatile range of clients, comprising from all areas of the economic spectrum, such as the food, pharmaceutical and clothing industry as well as the finance sector.",
        image: "photos/person3.png",
        category: Category::Partner,
    },
];

/// Title plus body text, used by practice cards and dropdown sections alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PRACTICE_AREAS: &[Section] = &[
    Section {
        title: "Trademarks",
        body: "Searches, filings and oppositions in Iceland and through the EUIPO and WIPO systems.",
    },
    Section {
        title: "Patents",
        body: "Validation of European patents, national filings and annuity management.",
    },
    Section {
        title: "Designs",
        body: "Protection of product appearance, from filing strategy to renewals.",
    },
    Section {
        title: "Enforcement",
        body: "Customs actions, infringement disputes and domain name complaints.",
    },
];

pub const ABOUT_SECTIONS: &[Section] = &[
    Section {
        title: "Our history",
        body: "Tego was founded by IP attorneys who wanted a focused practice for intellectual property in Iceland.",
    },
    Section {
        title: "Our approach",
        body: "One attorney follows each matter from first advice to final registration.",
    },
    Section {
        title: "Our clients",
        body: "Domestic start-ups, established Icelandic brands and foreign rights holders entering the Icelandic market.",
    },
];

pub const SERVICES: &[Section] = &[
    Section {
        title: "Trademark registration",
        body: "Clearance searches, applications, responses to office actions and renewals.",
    },
    Section {
        title: "Patent validation",
        body: "Translation and validation of granted European patents in Iceland.",
    },
    Section {
        title: "Portfolio management",
        body: "Deadline monitoring and renewals across every registered right you hold.",
    },
    Section {
        title: "Disputes",
        body: "Oppositions, cancellation actions and representation before the Icelandic IP office.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Clear advice and fast filings. Our brand was protected before launch.",
        author: "Food producer, Reykjavík",
    },
    Testimonial {
        quote: "They handled our European validations without a single missed deadline.",
        author: "Pharmaceutical company",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { code: "is", label: "IS" },
    Language { code: "en", label: "EN" },
];

pub const DEFAULT_LANGUAGE: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamFilter {
    All,
    Partners,
}

impl TeamFilter {
    pub fn label(&self) -> &'static str {
        match self {
            TeamFilter::All => "All",
            TeamFilter::Partners => "Partners",
        }
    }

    pub fn shows(&self, member: &TeamMember) -> bool {
        match self {
            TeamFilter::All => true,
            TeamFilter::Partners => member.category == Category::Partner,
        }
    }
}

pub const TEAM_FILTERS: &[TeamFilter] = &[TeamFilter::All, TeamFilter::Partners];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partners_filter_hides_staff() {
        let shown: Vec<_> = TEAM_MEMBERS
            .iter()
            .filter(|member| TeamFilter::Partners.shows(member))
            .map(|member| member.name)
            .collect();
        assert_eq!(shown.len(), 2);
        assert!(!shown.contains(&"Helga Guðmundsdóttir"));
        assert!(TEAM_MEMBERS.iter().all(|member| TeamFilter::All.shows(member)));
    }

    #[test]
    fn default_language_exists() {
        assert_eq!(LANGUAGES[DEFAULT_LANGUAGE].code, "en");
    }
}
