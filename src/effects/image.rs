/// Images drift against the scroll around their container's centre.
#[derive(Debug, Clone, Copy)]
pub struct ImageParallax {
    pub speed: f64,
    pub zoom: f64,
}

impl ImageParallax {
    pub fn translate_y(&self, container_top: f64, container_height: f64, viewport_height: f64) -> f64 {
        let container_center = container_top + container_height / 2.0;
        (container_center - viewport_height / 2.0) * self.speed
    }

    pub fn transform_css(&self, translate_y: f64) -> String {
        format!("translate3d(0, {}px, 0) scale({})", translate_y, self.zoom)
    }
}
