use fltk::{
    enums::{Align, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub body: Frame,
}

pub fn build_main_window() -> MainWidgets {
    let mut wind = Window::new(100, 100, 640, 480, "LumenShell");
    wind.set_xclass("LumenShell");

    let mut flex = Flex::new(0, 0, 640, 480, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut body = Frame::default();
    body.set_frame(FrameType::FlatBox);
    body.set_align(Align::Center | Align::Inside);
    body.set_label_size(16);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        body,
    }
}
