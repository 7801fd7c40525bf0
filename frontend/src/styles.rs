pub const CARD: &str = "bg-gray-900 rounded-lg shadow-lg border border-amber-500/20 p-6";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-gray-900 bg-gradient-to-r from-amber-400 to-yellow-500 hover:from-amber-500 hover:to-yellow-600 shadow-lg transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-600 text-white hover:bg-gray-800 transition-colors duration-200";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-gray-800 py-2 px-3 text-white shadow-sm ring-1 ring-inset ring-gray-700 placeholder:text-gray-500 focus:ring-2 focus:ring-amber-400";
pub const TEXT_H1: &str = "text-3xl font-bold text-white";
pub const TEXT_BODY: &str = "text-gray-300";
pub const ALERT_SUCCESS: &str = "bg-green-900/50 border border-green-800 rounded-lg p-3 text-green-200 text-sm";
pub const ALERT_ERROR: &str = "bg-red-900/50 border border-red-800 rounded-lg p-3 text-red-200 text-sm";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm";
pub const MODAL_CARD: &str = "relative bg-gray-900 rounded-2xl border border-amber-500/40 shadow-2xl p-8 max-w-md w-full mx-4 text-center";
