use crate::domain::update::CandidateUpdate;

/// Turns the raw content of a source page into candidate updates.
pub trait Extractor: Send + Sync {
    fn extract(&self, raw: &str) -> Vec<CandidateUpdate>;
}

impl<F> Extractor for F
where
    F: Fn(&str) -> Vec<CandidateUpdate> + Send + Sync,
{
    fn extract(&self, raw: &str) -> Vec<CandidateUpdate> {
        self(raw)
    }
}

/// Fixed notice published by a [`PlaceholderExtractor`].
#[derive(Debug, Clone, Copy)]
pub struct StaticNotice {
    pub title: &'static str,
    pub url: &'static str,
    pub summary: &'static str,
}

/// Yields the same notices whatever the page contains.
///
/// Stands in for sites whose markup has not been mapped yet.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderExtractor {
    notices: &'static [StaticNotice],
}

impl PlaceholderExtractor {
    pub const fn new(notices: &'static [StaticNotice]) -> Self {
        Self { notices }
    }
}

impl Extractor for PlaceholderExtractor {
    fn extract(&self, _raw: &str) -> Vec<CandidateUpdate> {
        self.notices
            .iter()
            .filter_map(|notice| {
                CandidateUpdate::new(notice.title, notice.url, Some(notice.summary.to_string()))
                    .inspect_err(|e| log::warn!("Skipping notice {:?}: {e}", notice.url))
                    .ok()
            })
            .collect()
    }
}

/// Extractor for sources with no extraction rules; finds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNotices;

impl Extractor for NoNotices {
    fn extract(&self, _raw: &str) -> Vec<CandidateUpdate> {
        Vec::new()
    }
}

pub const BPSC_NOTICES: &[StaticNotice] = &[StaticNotice {
    title: "বিসিএস ৪৫তম বার্ষিক পরীক্ষার বিজ্ঞপ্তি",
    url: "https://www.bpsc.gov.bd/site/view/notices/",
    summary: "বাংলাদেশ সিভিল সার্ভিস ৪৫তম বার্ষিক পরীক্ষার বিজ্ঞপ্তি প্রকাশিত হয়েছে",
}];

pub const EDUCATION_NOTICES: &[StaticNotice] = &[StaticNotice {
    title: "এইচএসসি পরীক্ষার রুটিন প্রকাশ",
    url: "http://www.educationboardresults.gov.bd/notice/hsc-routine",
    summary: "২০২৪ সালের এইচএসসি পরীক্ষার রুটিন প্রকাশিত হয়েছে",
}];
