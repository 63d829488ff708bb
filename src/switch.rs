use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;
    use crate::content::PROFILE;

    match routes {
        Route::NotFound => html! { <NotFound/> },
        Route::Home => html! {
            <>
                <PageTitle title={ PROFILE.name }/>
                <Header/>
                <main>
                    <Hero/>
                    <About/>
                    <Projects/>
                    <Contact/>
                </main>
                <Footer/>
            </>
        },
    }
}
