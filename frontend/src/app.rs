use crate::components::testimonials::TestimonialsCarousel;
use yew::{html, Component, Context, Html};

const REVIEW_URL: &str = "https://g.page/r/Cfq7RASC6qOdEAE/review";

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <main>
                <TestimonialsCarousel review_url={REVIEW_URL} />
            </main>
        }
    }
}
