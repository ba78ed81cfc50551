// Constants for the visualization canvas and the working array

/// Width of the logical canvas, in canvas units
pub const CANVAS_WIDTH: u32 = 910;

/// Height of the logical canvas, in canvas units
/// Values are drawn 1:1 against this height, so it is also the exclusive upper bound for data
pub const CANVAS_HEIGHT: u32 = 750;

/// Width of a single bar, in canvas units
pub const BAR_WIDTH: u32 = 7;

/// Number of elements in the working array (one bar per element across the canvas)
pub const ARRAY_SIZE: usize = (CANVAS_WIDTH / BAR_WIDTH) as usize;
