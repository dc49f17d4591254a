use crate::model::api::PaginationDto;

/// One page of a list query together with the unpaginated total.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl<T> Paginated<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Splits into the DTO items and the pagination block for the response.
    pub fn into_parts<U>(self, f: impl FnMut(T) -> U) -> (Vec<U>, PaginationDto) {
        let count = self.items.len() as u64;
        let pagination = PaginationDto::new(self.limit, self.offset, count, self.total);

        (self.items.into_iter().map(f).collect(), pagination)
    }
}

/// `limit`/`offset` query parameters.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub limit: u64,
    pub offset: u64,
}

impl PageParams {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }
}
