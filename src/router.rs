use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use super::Route;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    #[test]
    fn root_is_home() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
