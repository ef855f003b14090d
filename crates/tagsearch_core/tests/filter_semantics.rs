use tagsearch_core::{
    filter_articles, Article, ArticleSearch, Catalog, EmptySelectionPolicy, MatchPolicy,
    SearchConfig, SearchError, TagSelection,
};

fn article(id: &str, tags: &[&str]) -> Article {
    Article::new(
        id,
        format!("Article {id}"),
        format!("About {id}"),
        tags.iter().map(|tag| tag.to_string()).collect(),
        "2021年04月01日 09:30",
    )
}

fn example_catalog() -> Catalog {
    Catalog::new(vec![
        article("1", &["a", "b"]),
        article("2", &["a"]),
        article("3", &["a", "b", "c"]),
    ])
}

fn ready(config: SearchConfig) -> ArticleSearch {
    let mut search = ArticleSearch::new(config);
    search.load(example_catalog()).unwrap();
    search
}

fn ids(search: &ArticleSearch, selection: &TagSelection) -> Vec<String> {
    search
        .filter(selection)
        .unwrap()
        .into_iter()
        .map(|article| article.id.clone())
        .collect()
}

#[test]
fn all_match_returns_superset_articles_in_order() {
    let search = ready(SearchConfig::default().with_match_policy(MatchPolicy::All));
    assert_eq!(ids(&search, &TagSelection::new(["a", "b"])), vec!["1", "3"]);
}

#[test]
fn any_match_returns_intersecting_articles_in_order() {
    let search = ready(SearchConfig::default());
    assert_eq!(ids(&search, &TagSelection::new(["b"])), vec!["1", "3"]);
    assert_eq!(ids(&search, &TagSelection::new(["c", "a"])), vec!["1", "2", "3"]);
}

#[test]
fn unknown_tag_yields_empty_result_not_error() {
    for policy in [MatchPolicy::Any, MatchPolicy::All] {
        let search = ready(SearchConfig::default().with_match_policy(policy));
        assert!(search.filter(&TagSelection::new(["zzz"])).unwrap().is_empty());
    }
}

#[test]
fn filter_matches_reference_definition_for_every_selection() {
    let catalog = Catalog::new(vec![
        article("p", &["rust", "cli"]),
        article("q", &["web"]),
        article("r", &["rust", "web", "db"]),
        article("s", &[]),
        article("t", &["db", "db"]),
    ]);
    let universe = ["rust", "cli", "web", "db", "none"];

    for mask in 1u32..(1 << universe.len()) {
        let chosen: Vec<&str> = universe
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, tag)| *tag)
            .collect();
        let selection = TagSelection::new(chosen.iter().copied());

        let expected_any: Vec<&str> = catalog
            .articles
            .iter()
            .filter(|a| chosen.iter().any(|t| a.tags.iter().any(|own| own == t)))
            .map(|a| a.id.as_str())
            .collect();
        let expected_all: Vec<&str> = catalog
            .articles
            .iter()
            .filter(|a| chosen.iter().all(|t| a.tags.iter().any(|own| own == t)))
            .map(|a| a.id.as_str())
            .collect();

        let any: Vec<&str> = filter_articles(&catalog.articles, &selection, MatchPolicy::Any)
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        let all: Vec<&str> = filter_articles(&catalog.articles, &selection, MatchPolicy::All)
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();

        assert_eq!(any, expected_any, "any-match for {chosen:?}");
        assert_eq!(all, expected_all, "all-match for {chosen:?}");
    }
}

#[test]
fn empty_selection_prompts_by_default() {
    let search = ready(SearchConfig::default());
    let err = search.filter(&TagSelection::default()).unwrap_err();
    assert_eq!(err, SearchError::EmptySelection);
}

#[test]
fn empty_selection_shows_all_when_configured() {
    let search =
        ready(SearchConfig::default().with_empty_selection(EmptySelectionPolicy::ShowAll));
    assert_eq!(ids(&search, &TagSelection::default()), vec!["1", "2", "3"]);
}

#[test]
fn repeated_filter_is_stable_and_leaves_catalog_untouched() {
    let search = ready(SearchConfig::default().with_match_policy(MatchPolicy::All));
    let selection = TagSelection::new(["a"]);

    let first = ids(&search, &selection);
    let second = ids(&search, &selection);
    assert_eq!(first, second);
    assert_eq!(selection.len(), 1);
    assert_eq!(search.available_tags().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn tag_matching_is_case_sensitive() {
    let search = ready(SearchConfig::default());
    assert!(search.filter(&TagSelection::new(["A"])).unwrap().is_empty());
}
