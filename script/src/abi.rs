//! Client bindings for the deployed contract.
#![allow(missing_docs)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract TestErc20 {
        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function decimals() external view returns (uint8 decimals);
        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function owner() public view virtual returns (address owner);

        function mint(address to, uint256 amount) external;
        function burn(address from, uint256 amount) external;
        function burnSelf(uint256 amount) external;

        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InvalidReceiver(address receiver);
        error OwnableUnauthorizedAccount(address account);
        error TestERC20ArrayLengthMismatch(uint256 accounts, uint256 amounts);

        #[derive(Debug, PartialEq)]
        event TokensMinted(address indexed operator, address indexed to, uint256 amount);
        #[derive(Debug, PartialEq)]
        event TokensBurned(address indexed operator, address indexed from, uint256 amount);
        #[derive(Debug, PartialEq)]
        event TokensTransferred(address indexed from, address indexed to, uint256 amount);
    }
);
