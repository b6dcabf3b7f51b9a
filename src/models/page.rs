use serde::Serialize;

/// Fixed page size used by the paginated read paths.
pub const PAGE_SIZE: usize = 50;

/// One page of results plus the reported total element count.
///
/// Note: for the anomaly lookup the total is the pre-filter session count,
/// not the number of anomalies (filtering happens after pagination there).
/// The gap scanner reports the true total.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: usize) -> Self {
        Self {
            content,
            page,
            size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Whitelisted sort columns for session listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortField {
    Id,
    WorkStarted,
    WorkFinished,
    Duration,
    CreatedAt,
}

impl SortField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "id" => Some(Self::Id),
            "started" | "work_started" => Some(Self::WorkStarted),
            "finished" | "work_finished" => Some(Self::WorkFinished),
            "duration" => Some(Self::Duration),
            "created" | "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    /// Column name used in ORDER BY. Values come from this enum only,
    /// never from raw user input.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::WorkStarted => "work_started",
            SortField::WorkFinished => "work_finished",
            SortField::Duration => "duration_secs",
            SortField::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}
