//! Pertelian X2040 command definitions
//!
//! This module defines the control codes understood by the X2040's
//! HD44780-compatible controller, the line address table, and the pure
//! encoding functions that turn semantic requests into wire bytes.
//!
//! ## Command Framing
//!
//! Control codes cross the wire as exactly two bytes: the command marker
//! (`0xFE`) followed by the code itself. Two things are never framed:
//! - the line address byte, which selects the target row and is sent bare
//! - text data, which is sent as raw ASCII bytes
//!
//! ## Example
//!
//! ```
//! use pertelian::command;
//!
//! // Clear command, framed for transmission
//! assert_eq!(command::wrap(command::CLEAR), [0xFE, 0x01]);
//!
//! // Address byte for the second display line
//! assert_eq!(command::line_address(1), Some(0xC0));
//! ```

// Command framing

/// Command marker byte (0xFE)
///
/// Prefixes every control code on the wire. The device treats the byte
/// following the marker as a command rather than display data.
pub const COMMAND_MARKER: u8 = 0xFE;

// Control codes

/// Clear display command (0x01)
///
/// Blanks all four lines and returns the write position to line 0.
pub const CLEAR: u8 = 0x01;

/// Backlight off command (0x02)
pub const BACKLIGHT_OFF: u8 = 0x02;

/// Backlight on command (0x03)
pub const BACKLIGHT_ON: u8 = 0x03;

// Initialization codes

/// Function set command (0x38)
///
/// Selects the 8-bit interface. Must be the first command the device
/// receives; all later codes assume the interface width is configured.
pub const FUNCTION_SET_8BIT: u8 = 0x38;

/// Entry mode command (0x06)
///
/// Cursor advances rightward after each data write, no automatic
/// display shift.
pub const ENTRY_MODE_RIGHT: u8 = 0x06;

/// Shift control command (0x10)
///
/// The cursor, not the display window, moves on each data write.
pub const CURSOR_MOVE: u8 = 0x10;

/// Display control command (0x0C)
///
/// Display visible, cursor hidden, no blink. Used during initialization;
/// [`display_control`] builds the general form.
pub const DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;

// Line addressing

/// Number of addressable display lines
pub const LINE_COUNT: u8 = 4;

/// Characters per display line
pub const LINE_WIDTH: usize = 20;

/// DDRAM address byte for each display line, top to bottom
///
/// The controller interleaves rows in memory: line 2 sits 0x14 bytes
/// after line 0, line 3 the same distance after line 1.
pub const LINE_ADDRESSES: [u8; LINE_COUNT as usize] = [0x80, 0xC0, 0x94, 0xD4];

/// Look up the address byte for a display line
///
/// Returns `None` for lines outside `0..LINE_COUNT`. The address byte is
/// transmitted bare, without the command marker; bit 7 of the address
/// already identifies it as a set-address command to the controller.
pub fn line_address(line: u8) -> Option<u8> {
    LINE_ADDRESSES.get(line as usize).copied()
}

/// Frame a control code for transmission
///
/// Always exactly two bytes: the command marker followed by the code.
pub fn wrap(code: u8) -> [u8; 2] {
    [COMMAND_MARKER, code]
}

/// Control code for switching the backlight on or off
pub fn backlight(enable: bool) -> u8 {
    if enable { BACKLIGHT_ON } else { BACKLIGHT_OFF }
}

/// Build the display/cursor/blink control code
///
/// Bit layout, high to low: bit 4 is always set, bit 3 selects display
/// visibility, bit 2 cursor visibility, bit 1 cursor blink. All other
/// bits are zero.
pub fn display_control(display_on: bool, cursor_on: bool, blink_on: bool) -> u8 {
    let mut code = 1u8 << 4;
    code |= u8::from(display_on) << 3;
    code |= u8::from(cursor_on) << 2;
    code |= u8::from(blink_on) << 1;
    code
}
