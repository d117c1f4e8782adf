pub const CONTAINER: &str = "min-h-screen bg-rose-50/60 dark:bg-gray-900 w-full";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const CONTAINER_SM: &str = "max-w-md mx-auto px-4 sm:px-6 py-4";

pub const NAV: &str = "w-full bg-white/70 dark:bg-gray-800/70 backdrop-blur-md border-b border-rose-100 dark:border-gray-700/50";
pub const NAV_INNER: &str = "max-w-7xl mx-auto h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-rose-500 to-fuchsia-600";
pub const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-rose-600 dark:hover:text-rose-400 transition-colors duration-200";

pub const FOOTER: &str = "w-full bg-white/80 dark:bg-gray-900/80 border-t border-rose-100 dark:border-gray-700/50 py-4 text-center";
pub const FOOTER_TEXT: &str = "text-sm text-gray-500 dark:text-gray-400";

pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";

pub const FORM: &str = "mt-4 space-y-4";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-rose-500";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-rose-500 to-fuchsia-600 hover:from-rose-600 hover:to-fuchsia-700 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-3 py-1.5 text-sm font-medium text-white hover:bg-red-700";
pub const BUTTON_WHATSAPP: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-green-600 hover:bg-green-700 shadow-lg transition-all duration-300";
pub const SPIN_BUTTON: &str = "w-full py-4 px-6 text-lg font-bold text-white bg-gradient-to-r from-rose-500 to-fuchsia-600 hover:from-rose-600 hover:to-fuchsia-700 rounded-xl shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed disabled:transform-none";

pub const ALERT_STACK: &str = "fixed top-4 left-1/2 -translate-x-1/2 z-[9999] w-full max-w-md space-y-2 px-4";
pub const ALERT_BASE: &str = "flex items-start justify-between rounded-lg border p-4 shadow-lg";
pub const ALERT_SUCCESS: &str = "bg-green-50 dark:bg-green-900/60 border-green-200 dark:border-green-800 text-green-700 dark:text-green-200";
pub const ALERT_INFO: &str = "bg-blue-50 dark:bg-blue-900/60 border-blue-200 dark:border-blue-800 text-blue-700 dark:text-blue-200";
pub const ALERT_WARNING: &str = "bg-yellow-50 dark:bg-yellow-900/60 border-yellow-200 dark:border-yellow-800 text-yellow-800 dark:text-yellow-200";
pub const ALERT_DANGER: &str = "bg-red-50 dark:bg-red-900/60 border-red-200 dark:border-red-800 text-red-700 dark:text-red-200";

pub const BADGE_SUCCESS: &str = "inline-flex items-center rounded-full bg-green-600 px-2.5 py-0.5 text-xs font-medium text-white";
pub const BADGE_WARNING: &str = "inline-flex items-center rounded-full bg-yellow-500 px-2.5 py-0.5 text-xs font-medium text-white";
pub const BADGE_DANGER: &str = "inline-flex items-center rounded-full bg-red-600 px-2.5 py-0.5 text-xs font-medium text-white";

pub const TABLE: &str = "min-w-full divide-y divide-gray-200 dark:divide-gray-700 text-left";
pub const TABLE_HEADER: &str = "px-4 py-3 text-xs font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400";
pub const TABLE_CELL: &str = "px-4 py-3 text-sm text-gray-700 dark:text-gray-200";
pub const TABLE_EMPTY: &str = "px-4 py-6 text-center text-sm text-gray-400 dark:text-gray-500";

pub const BANNER_ACTIVE: &str = "w-full py-3 px-4 text-center text-sm font-medium text-white bg-gradient-to-r from-green-500 to-emerald-600";
pub const BANNER_ENDED: &str = "w-full py-3 px-4 text-center text-sm font-medium text-white bg-gradient-to-r from-gray-500 to-gray-600";
pub const OFFLINE_BANNER: &str = "fixed top-0 left-0 z-[10000] w-full py-2 px-4 text-center text-sm font-medium text-white bg-gray-900/90";

pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/60 px-4";
pub const MODAL_CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-2xl p-8 max-w-lg w-full text-center";

pub const PRIZE_TILE: &str = "bg-white dark:bg-gray-800 rounded-lg shadow p-4 text-center border border-rose-100 dark:border-gray-700";
pub const ADMIN_GRID: &str = "grid grid-cols-1 lg:grid-cols-2 gap-6";
