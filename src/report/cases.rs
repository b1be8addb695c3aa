//! Static lookup tables for the 11 predefined case studies: the source-table
//! column names holding each case study's answers, and the display metadata
//! (title and prompt) shown in the report.

/// Number of predefined case studies.
pub const CASE_COUNT: u8 = 11;

/// The three source-table columns holding one case study's answers.
/// The names are opaque survey codes (`Qxx` or bare numeric strings).
#[derive(Eq, PartialEq, Debug)]
pub struct CaseColumns {
    pub irb_consideration: &'static str,
    pub key_factors: &'static str,
    pub ethical_concerns: &'static str,
}

/// Display metadata for one case study.
#[derive(Eq, PartialEq, Debug)]
pub struct CaseStudy {
    pub title: &'static str,
    pub prompt: &'static str,
}

// Indexed by case study id - 1.
static CASE_COLUMNS: [CaseColumns; CASE_COUNT as usize] = [
    CaseColumns {
        irb_consideration: "Q137",
        key_factors: "Q138_13_TEXT",
        ethical_concerns: "Q141",
    },
    CaseColumns {
        irb_consideration: "20",
        key_factors: "21_13_TEXT",
        ethical_concerns: "Q115",
    },
    CaseColumns {
        irb_consideration: "40",
        key_factors: "41_13_TEXT",
        ethical_concerns: "Q125",
    },
    CaseColumns {
        irb_consideration: "30",
        key_factors: "31_13_TEXT",
        ethical_concerns: "Q121",
    },
    CaseColumns {
        irb_consideration: "45",
        key_factors: "46_13_TEXT",
        ethical_concerns: "Q127",
    },
    CaseColumns {
        irb_consideration: "50",
        key_factors: "51_13_TEXT",
        ethical_concerns: "Q129",
    },
    CaseColumns {
        irb_consideration: "65",
        key_factors: "66_13_TEXT",
        ethical_concerns: "Q135",
    },
    CaseColumns {
        irb_consideration: "55",
        key_factors: "56_13_TEXT",
        ethical_concerns: "Q131",
    },
    CaseColumns {
        irb_consideration: "25",
        key_factors: "26_13_TEXT",
        ethical_concerns: "Q117",
    },
    CaseColumns {
        irb_consideration: "35",
        key_factors: "36_13_TEXT",
        ethical_concerns: "Q123",
    },
    CaseColumns {
        irb_consideration: "60",
        key_factors: "61_13_TEXT",
        ethical_concerns: "Q133",
    },
];

static CASE_STUDIES: [CaseStudy; CASE_COUNT as usize] = [
    CaseStudy {
        title: "Predict election via news comments",
        prompt: "Researchers plan to scrape public comments from online newspaper pages to predict election outcomes. They will aggregate their analysis to determine public sentiment. The researchers don\u{2019}t plan to inform commenters, and they plan to collect potentially-identifiable user names. Scraping comments violates the newspaper\u{2019}s terms of service.",
    },
    CaseStudy {
        title: "Predict risky drug-use via Twitter",
        prompt: "Researchers plan to scrape public Twitter feeds to predict risky drug-use behaviors. They will analyze individual behaviors. The researchers don\u{2019}t plan to inform Twitter users, but they will not collect any identifying information. Scraping Tweets does not violate Twitter\u{2019}s terms of service.",
    },
    CaseStudy {
        title: "Study sexual behavior via dating app data",
        prompt: "Researchers plan to analyze private interaction data from a dating site to understand the sexual behavior of groups. The researchers plan to collect informed consent from dating site users, and they plan to collect identifiable information from participants. Asking users for permission to use their data does not violate the dating site\u{2019}s terms of service.",
    },
    CaseStudy {
        title: "Understand political views via news comments",
        prompt: "Researchers plan to collect newspaper comments by reading articles and cutting and pasting all associated comments into spreadsheets. They will use qualitative analysis to understand individual political views. The researchers don\u{2019}t plan to inform commenters, and they plan to collect potentially-identifiable user names. Cutting and pasting comments does not violate the newspaper\u{2019}s terms of service.",
    },
    CaseStudy {
        title: "Study group mobility via cell phone geolocation data",
        prompt: "Researchers plan to work with a mobile phone company to collect geolocation data to understand group mobility patterns in a city. The researchers will not inform the mobile phone users, and they will not collect any additional identifying information. Partnering with the mobile phone company to collect data does not violate the company\u{2019}s terms of service.",
    },
    CaseStudy {
        title: "Predict student mental health via health records and social media",
        prompt: "Researchers plan to combine mental health records provided by a university and public social media activity to predict mental health conditions among students. The researchers plan to collect informed consent, and they plan to collect identifiable information from participants.",
    },
    CaseStudy {
        title: "Study political event via public Tweets",
        prompt: "Researchers plan to use a database of public tweets curated and shared by another researcher to study a political event. Researchers do not plan to inform the original posters, and researchers have taken measures to de-identify the data.",
    },
    CaseStudy {
        title: "Predict mental health via health forum data and public Tweets",
        prompt: "Researchers plan to scrape data from an open health forum and combine it with scraped tweets to predict mental health conditions. The researchers will not inform forum users, and they may collect potentially identifying information. Scraping data violates neither the health forum nor Twitter\u{2019}s terms of service.",
    },
    CaseStudy {
        title: "Predict sexual preference via profile photos",
        prompt: "Researchers plan to scrape profile photos, which are visible to any member of the service, from a dating site to build models that predict sexual preference or behavior. Researchers will not inform the dating site users, but they will not collect any identifying information and their photograph dataset will not be released publicly. Creating a fake profile, necessary to access the photos, violates the dating site\u{2019}s terms of service.",
    },
    CaseStudy {
        title: "Study impact of exercise via Apple Healthkit data",
        prompt: "Researchers plan to ask Apple HealthKit users to voluntarily submit their activity data to understand the general impact of exercise on a health condition. The researchers plan to obtain informed consent, and they plan to collect identifiable information from participants. Asking users to submit activity data does not violate Apple Health Kit\u{2019}s terms of service.",
    },
    CaseStudy {
        title: "Study group dynamics via Facebook posts",
        prompt: "Researchers plan to scrape public posts and interactions from Facebook to study group-level dynamics. They plan to collect informed consent from the original poster, but not those they interacted with, and they may collect identifying information. Scraping posts with permission of the original poster does not violate Facebook\u{2019}s terms of service.",
    },
];

/// All case study ids, in report order.
pub fn case_ids() -> impl Iterator<Item = u8> {
    1..=CASE_COUNT
}

/// The column names for a case study id. Panics if the id is out of 1..=CASE_COUNT.
pub fn case_columns(case_id: u8) -> &'static CaseColumns {
    &CASE_COLUMNS[case_index(case_id)]
}

/// The display metadata for a case study id. Panics if the id is out of 1..=CASE_COUNT.
pub fn case_study(case_id: u8) -> &'static CaseStudy {
    &CASE_STUDIES[case_index(case_id)]
}

fn case_index(case_id: u8) -> usize {
    assert!(
        (1..=CASE_COUNT).contains(&case_id),
        "case id {} out of range",
        case_id
    );
    (case_id - 1) as usize
}
