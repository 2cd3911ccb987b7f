pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const CARD_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 rounded-lg transition-colors duration-200";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg transition-all duration-300";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 items-center justify-center bg-black/60 backdrop-blur-sm";
pub const CONFETTI_LAYER: &str = "fixed inset-0 pointer-events-none z-40";
