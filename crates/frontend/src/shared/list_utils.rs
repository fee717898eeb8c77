/// List helpers shared by the catalog and request screens (client-side
/// search plus the debounced search box).
use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

/// Data types that support client-side substring search.
pub trait Searchable {
    /// Whether the item matches the filter text.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Filter a fetched list by a search string. No filter means everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Case-insensitive substring match used by `Searchable` impls.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

const DEBOUNCE_MS: u32 = 250;

/// Search box with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value (for the clear button state).
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter once input settles.
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    // Latest edit wins: every keystroke bumps the generation, and only the
    // timeout that still owns the current generation publishes its value.
    let debounce_gen = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let generation = debounce_gen.get_value() + 1;
        debounce_gen.set_value(generation);

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if debounce_gen.get_value() == generation {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        debounce_gen.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || {
                (!input_value.get().is_empty())
                    .then(|| {
                        view! {
                            <button
                                class="search-input__clear"
                                title="Clear"
                                on:click=clear_filter
                            >
                                {crate::shared::icons::icon("x")}
                            </button>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Model {
        name: String,
        maker: String,
    }

    impl Searchable for Model {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ignore_case(&self.name, filter) || contains_ignore_case(&self.maker, filter)
        }
    }

    fn catalog() -> Vec<Model> {
        vec![
            Model {
                name: "Aurum Mk II".into(),
                maker: "Acme Audio".into(),
            },
            Model {
                name: "Ethereal".into(),
                maker: "SoundForge".into(),
            },
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        assert_eq!(filter_list(&catalog(), "").len(), 2);
        assert_eq!(filter_list(&catalog(), "   ").len(), 2);
    }

    #[test]
    fn matches_name_or_maker_case_insensitively() {
        let hits = filter_list(&catalog(), "aurum");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Aurum Mk II");

        let hits = filter_list(&catalog(), "FORGE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].maker, "SoundForge");
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_list(&catalog(), "subwoofer").is_empty());
    }
}
