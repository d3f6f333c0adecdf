use crate::types::Point;
use web_sys::{Element, MouseEvent};

/// Top-left corner of an element in client coordinates
pub fn element_origin(element: &Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

pub fn client_point(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

/// Pointer position relative to the element's top-left corner
pub fn client_to_element_coords(event: &MouseEvent, element: &Element) -> Point {
    let origin = element_origin(element);
    let pointer = client_point(event);
    Point::new(pointer.x - origin.x, pointer.y - origin.y)
}
