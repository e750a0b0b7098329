use std::fmt;
use std::str::FromStr;

/// Records requested per fetch. Only the sizes the control offers exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    Thirty,
    Fifty,
    Hundred,
}

impl PageSize {
    /// Options in the order the rows-per-page selector lists them.
    pub const OPTIONS: [PageSize; 3] = [PageSize::Thirty, PageSize::Fifty, PageSize::Hundred];

    pub fn get(self) -> u32 {
        match self {
            PageSize::Thirty => 30,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<u32> for PageSize {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageSize::OPTIONS
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| format!("rows per page must be one of 30, 50, 100 (got {value})"))
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("not a number: {s}"))?;
        PageSize::try_from(value)
    }
}

/// What the pagination control shows under the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub count: u64,
    pub page: u32,
    pub rows_per_page: PageSize,
    pub options: [PageSize; 3],
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationView {
    pub fn new(count: u64, page: u32, rows_per_page: PageSize) -> Self {
        Self {
            count,
            page,
            rows_per_page,
            options: PageSize::OPTIONS,
            previous_enabled: page > 0,
            next_enabled: page < u32::MAX && u64::from(page) + 1 < page_count(count, rows_per_page),
        }
    }

    /// `"<from>-<to> of <count>"`, the displayed-rows label.
    pub fn summary(&self) -> String {
        let size = u64::from(self.rows_per_page.get());
        let page = u64::from(self.page);
        let from = if self.count == 0 { 0 } else { page * size + 1 };
        let to = self.count.min((page + 1) * size);
        format!("{from}-{to} of {}", self.count)
    }
}

/// Number of pages needed for `count` rows.
pub fn page_count(count: u64, rows_per_page: PageSize) -> u64 {
    count.div_ceil(u64::from(rows_per_page.get()))
}

/// Whether the control would let the user land on `page`.
pub fn is_reachable(page: u32, count: u64, rows_per_page: PageSize) -> bool {
    page == 0 || u64::from(page) < page_count(count, rows_per_page)
}
