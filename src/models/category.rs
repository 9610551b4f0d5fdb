//! Fixed table of upstream movie categories.

use serde::Serialize;

/// An upstream category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Display name, as accepted by the API
    pub name: &'static str,

    /// Upstream genre id used by the `genre` query parameter
    pub genre_id: &'static str,

    /// Path segment used by the `/categoria/{slug}` pages
    pub slug: &'static str,
}

#[rustfmt::skip]
const CATEGORIES: [Category; 19] = [
    Category { name: "Aventura", genre_id: "12", slug: "aventura" },
    Category { name: "Fantasia", genre_id: "14", slug: "fantasia" },
    Category { name: "Animação", genre_id: "16", slug: "animacao" },
    Category { name: "Drama", genre_id: "18", slug: "drama" },
    Category { name: "Terror", genre_id: "27", slug: "terror" },
    Category { name: "Ação", genre_id: "28", slug: "acao" },
    Category { name: "Comédia", genre_id: "35", slug: "comedia" },
    Category { name: "História", genre_id: "36", slug: "historia" },
    Category { name: "Faroeste", genre_id: "37", slug: "faroeste" },
    Category { name: "Thriller", genre_id: "53", slug: "thriller" },
    Category { name: "Crime", genre_id: "80", slug: "crime" },
    Category { name: "Documentário", genre_id: "99", slug: "documentario" },
    Category { name: "Ficção científica", genre_id: "878", slug: "ficcao-cientifica" },
    Category { name: "Mistério", genre_id: "9648", slug: "misterio" },
    Category { name: "Música", genre_id: "10402", slug: "musica" },
    Category { name: "Romance", genre_id: "10749", slug: "romance" },
    Category { name: "Família", genre_id: "10751", slug: "familia" },
    Category { name: "Guerra", genre_id: "10752", slug: "guerra" },
    Category { name: "Cinema TV", genre_id: "10770", slug: "cinema-tv" },
];

/// Read-only lookup of category name to upstream ids.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    entries: &'static [Category],
}

impl CategoryTable {
    /// Find a category by its exact display name.
    pub fn lookup(&self, name: &str) -> Option<&'static Category> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// Category names in table order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|c| c.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Category> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            entries: &CATEGORIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_table_has_nineteen_categories() {
        let table = CategoryTable::default();
        assert_eq!(table.len(), 19);
        assert_eq!(table.names().first(), Some(&"Aventura"));
        assert_eq!(table.names().last(), Some(&"Cinema TV"));
    }

    #[test]
    fn test_every_name_resolves_to_its_genre_id() {
        let table = CategoryTable::default();
        for name in table.names() {
            let category = table.lookup(name).unwrap();
            assert_eq!(category.name, name);
            assert!(category.genre_id.parse::<u32>().is_ok());
        }
        assert_eq!(table.lookup("Ficção científica").unwrap().genre_id, "878");
        assert_eq!(table.lookup("Cinema TV").unwrap().genre_id, "10770");
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = CategoryTable::default();
        assert!(table.lookup("drama").is_none());
        assert!(table.lookup("Anime").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_ids_and_slugs_are_unique() {
        let table = CategoryTable::default();
        let ids: HashSet<_> = table.iter().map(|c| c.genre_id).collect();
        let slugs: HashSet<_> = table.iter().map(|c| c.slug).collect();
        assert_eq!(ids.len(), table.len());
        assert_eq!(slugs.len(), table.len());
        assert!(table.iter().all(|c| c.slug.is_ascii()));
    }
}
