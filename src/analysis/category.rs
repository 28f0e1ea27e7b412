use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Death,
    Kill,
    Assist,
    Objective,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Death,
        Category::Kill,
        Category::Assist,
        Category::Objective,
    ];

    /// Plural key used in the serialized result.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Death => "deaths",
            Category::Kill => "kills",
            Category::Assist => "assists",
            Category::Objective => "objectives",
        }
    }
}

/// One value per category, serialized as `{deaths, kills, assists, objectives}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerCategory<T> {
    pub deaths: T,
    pub kills: T,
    pub assists: T,
    pub objectives: T,
}

impl<T> PerCategory<T> {
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        PerCategory {
            deaths: f(Category::Death),
            kills: f(Category::Kill),
            assists: f(Category::Assist),
            objectives: f(Category::Objective),
        }
    }

    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Death => &self.deaths,
            Category::Kill => &self.kills,
            Category::Assist => &self.assists,
            Category::Objective => &self.objectives,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Death => &mut self.deaths,
            Category::Kill => &mut self.kills,
            Category::Assist => &mut self.assists,
            Category::Objective => &mut self.objectives,
        }
    }
}
