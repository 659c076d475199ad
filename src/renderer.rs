use super::constants::{APP_TITLE, APP_VERSION};
use super::images::ImageResolver;
use super::ui::Ui;
use super::widgets::NavigationPage;

use menu_core::{AboutView, MenuView, RenderDescriptor, RestaurantsView, Screen};

pub struct Renderer;

impl Renderer {

    pub fn render(ui: &Ui, images: &ImageResolver, screen: &Screen, scroll_to_top: bool) {
        match screen {
            Screen::Loading => {
                ui.window().set_header_view(None);
                ui.navigation().replace_with_page(NavigationPage::Loading);
            }
            Screen::Failed { message } => {
                ui.window().set_header_view(None);
                ui.navigation().set_failure(message);
                ui.navigation().replace_with_page(NavigationPage::Failed);
            }
            Screen::Ready(descriptor) => {
                Self::render_descriptor(ui, images, descriptor);

                let view = descriptor.view();
                let page = NavigationPage::from_view(view);
                ui.window().set_header_view(Some(view));
                ui.navigation().replace_with_page(page);

                if scroll_to_top {
                    ui.navigation().scroll_to_top(page);
                }
            }
        }
    }

    fn render_descriptor(ui: &Ui, images: &ImageResolver, descriptor: &RenderDescriptor) {
        match descriptor {
            RenderDescriptor::Restaurants(view) => Self::render_restaurants(ui, images, view),
            RenderDescriptor::Menu(view) => Self::render_menu(ui, images, view),
            RenderDescriptor::About(view) => Self::render_about(ui, view),
        }
    }

    fn render_restaurants(ui: &Ui, images: &ImageResolver, view: &RestaurantsView) {
        ui.restaurants_page().set_cards(&view.cards, images);
    }

    fn render_menu(ui: &Ui, images: &ImageResolver, view: &MenuView) {
        let page = ui.menu_page();
        page.set_header(&view.header.name, &view.header.description);
        page.set_categories(&view.categories);
        page.set_products(&view.products, images);
    }

    fn render_about(ui: &Ui, view: &AboutView) {
        let page = ui.about_page();
        page.set_heading(view.title);
        page.set_body(view.body);
        page.set_footer(format!("{APP_TITLE} {APP_VERSION}"));
    }

}
