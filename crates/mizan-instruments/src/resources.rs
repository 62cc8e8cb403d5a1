//! Support resources surfaced by the crisis interrupt and the results view.

use serde::Serialize;

/// A crisis helpline.
#[derive(Debug, Clone, Serialize)]
pub struct CrisisResource {
    pub id: &'static str,
    pub country: &'static str,
    pub organization: &'static str,
    pub service: &'static str,
    pub phone: &'static str,
    pub availability: &'static str,
    pub languages: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationalResource {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub source: &'static str,
    pub reading_time_minutes: u32,
}

pub static CRISIS_RESOURCES: &[CrisisResource] = &[
    CrisisResource {
        id: "crisis-uae-befrienders",
        country: "الإمارات العربية المتحدة",
        organization: "Befrienders UAE",
        service: "خط دعم عاطفي",
        phone: "04-6575555",
        availability: "على مدار الساعة",
        languages: &["العربية", "الإنجليزية"],
    },
    CrisisResource {
        id: "crisis-saudi-national",
        country: "المملكة العربية السعودية",
        organization: "الخط الوطني للصحة النفسية",
        service: "دعم نفسي وإرشاد",
        phone: "920033360",
        availability: "على مدار الساعة",
        languages: &["العربية"],
    },
];

pub static EDUCATIONAL_RESOURCES: &[EducationalResource] = &[EducationalResource {
    id: "edu-anxiety-who",
    title: "منظمة الصحة العالمية - اضطرابات القلق",
    description: "معلومات علمية موثوقة حول أنواع اضطرابات القلق",
    url: "https://www.who.int/ar/news-room/fact-sheets/detail/anxiety-disorders",
    source: "منظمة الصحة العالمية",
    reading_time_minutes: 8,
}];

/// Educational resource ids per `module_id/disorder_id`.
static DISORDER_RESOURCES: &[(&str, &str, &[&str])] = &[
    ("anxiety", "gad", &["edu-anxiety-who"]),
    ("anxiety", "panic", &["edu-anxiety-who"]),
    ("anxiety", "social_anxiety", &["edu-anxiety-who"]),
    ("depression", "mdd", &["edu-anxiety-who"]),
    ("depression", "pdd", &["edu-anxiety-who"]),
];

/// Educational resources linked to a disorder. Unknown disorders get none.
pub fn resources_for_disorder(module_id: &str, disorder_id: &str) -> Vec<&'static EducationalResource> {
    DISORDER_RESOURCES
        .iter()
        .filter(|(m, d, _)| *m == module_id && *d == disorder_id)
        .flat_map(|(_, _, ids)| ids.iter())
        .filter_map(|id| EDUCATIONAL_RESOURCES.iter().find(|r| r.id == *id))
        .collect()
}
